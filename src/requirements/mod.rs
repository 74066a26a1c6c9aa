//! Package requirement resolution.
//!
//! Each enabled module may declare the packages it needs and may ship a
//! self-check. This module classifies those declarations against the
//! installed-package index and reports what is missing.
//!
//! # Modules
//!
//! - [`probe`] - Host environment snapshot (platform, PATH, variables)
//! - [`predicate`] - The boolean predicate interface and declarative conditions
//! - [`package`] - Requirements and the per-module declaration scope
//! - [`index`] - The installed-package index
//! - [`source`] - Where requirements are declared (`packages.yml`)
//! - [`self_check`] - Module self-checks (`doctor.yml`)
//! - [`status`] - Classification results
//! - [`resolver`] - The resolution pass

pub mod index;
pub mod package;
pub mod predicate;
pub mod probe;
pub mod resolver;
pub mod self_check;
pub mod source;
pub mod status;

pub use index::{DirectoryIndex, MemoryIndex, PackageIndex, HOST_BUILTINS};
pub use package::{PackageRequirement, PackageScope, Recipe};
pub use predicate::{Condition, ConditionExpr, Predicate, PredicateContext, SharedPredicate};
pub use probe::{Environment, Platform};
pub use resolver::{ResolutionReport, Resolver};
pub use self_check::{CheckFinding, SelfCheck, YamlSelfCheck, DOCTOR_FILE};
pub use source::{
    RequirementSource, SourceOutcome, Verbosity, YamlRequirementSource, PACKAGES_FILE,
};
pub use status::{Classification, RequirementStatus, SatisfiedBy};
