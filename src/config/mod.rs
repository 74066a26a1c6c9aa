//! Configuration loading, parsing, and validation.
//!
//! This module handles the module selection file (`init.yml`):
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use moddoctor::config::load_selection;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("init.yml"), "modules:\n  lang: [python]\n").unwrap();
//!
//! let selection = load_selection(temp.path()).unwrap();
//! assert_eq!(selection.modules[0].category, "lang");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    default_root, load_selection, parse_selection, ConfigPaths, DEFAULT_ROOT_DIR, SELECTION_FILE,
};
pub use schema::{CategoryModules, ModuleEntry, OutputMode, Selection, Settings};
pub use validator::{validate, validate_selection, ValidationError};
