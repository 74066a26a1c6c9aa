//! moddoctor - Diagnose the modules enabled in an editor distribution.
//!
//! moddoctor reads the user's module selection, resolves the packages each
//! enabled module declares, runs every module's self-check, and streams a
//! severity-colored report that ends with a count-based summary.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Selection file loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`modules`] - Module identity and the registry of enabled modules
//! - [`report`] - Diagnostic events, the streaming reporter and JSON output
//! - [`requirements`] - Package requirement resolution and self-checks
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use moddoctor::modules::{ModuleDescriptor, ModuleKey, ModuleRegistry};
//! use moddoctor::report::Reporter;
//! use moddoctor::requirements::{
//!     Environment, MemoryIndex, Platform, Resolver, YamlRequirementSource,
//! };
//! use moddoctor::ui::MockUI;
//!
//! let registry = ModuleRegistry::from_descriptors(vec![ModuleDescriptor::new(
//!     ModuleKey::new("ui", "modeline"),
//!     "/nonexistent/modeline",
//! )]);
//! let source = YamlRequirementSource::new();
//! let index = MemoryIndex::new();
//! let env = Environment::empty(Platform::Linux);
//!
//! let mut ui = MockUI::new();
//! let mut reporter = Reporter::new(&mut ui);
//! let resolution = Resolver::new(&source, &index, &env).run(&registry, &mut reporter);
//! let report = reporter.finish(resolution);
//! assert!(report.summary.is_clean());
//! ```
//!
//! For file-based loading, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod modules;
pub mod report;
pub mod requirements;
pub mod ui;

pub use error::{DoctorError, Result};
