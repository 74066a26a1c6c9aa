//! Error types for moddoctor operations.
//!
//! This module defines [`DoctorError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors (selection file, module lookup) are fatal and abort
//!   the run before any module is resolved
//! - Per-module errors (requirement file, self-check) are caught at the module
//!   boundary and turned into diagnostic events
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for moddoctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// Module selection file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A selected module has no directory in any module path.
    #[error("Module {module} not found (searched {searched})")]
    ModuleNotFound { module: String, searched: String },

    /// A module's package-requirement file could not be loaded.
    #[error("Failed to load packages for {module}: {message}")]
    RequirementLoad { module: String, message: String },

    /// A module's self-check routine failed.
    #[error("Self-check failed for {module}: {message}")]
    SelfCheck { module: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DoctorError {
    /// Whether this error belongs to the fatal configuration family.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
                | Self::ModuleNotFound { .. }
        )
    }
}

/// Result type alias for moddoctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = DoctorError::ConfigNotFound {
            path: PathBuf::from("/home/me/.distro.d/init.yml"),
        };
        assert!(err.to_string().contains("/home/me/.distro.d/init.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = DoctorError::ConfigParseError {
            path: PathBuf::from("/init.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/init.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn module_not_found_displays_module_and_paths() {
        let err = DoctorError::ModuleNotFound {
            module: ":lang python".into(),
            searched: "modules, contrib".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains(":lang python"));
        assert!(msg.contains("contrib"));
    }

    #[test]
    fn requirement_load_displays_module_and_message() {
        let err = DoctorError::RequirementLoad {
            module: ":tools magit".into(),
            message: "mapping values are not allowed".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains(":tools magit"));
        assert!(msg.contains("mapping values"));
    }

    #[test]
    fn configuration_family() {
        assert!(DoctorError::ConfigNotFound {
            path: PathBuf::from("x")
        }
        .is_configuration());
        assert!(DoctorError::ModuleNotFound {
            module: "m".into(),
            searched: "s".into()
        }
        .is_configuration());
        assert!(!DoctorError::SelfCheck {
            module: "m".into(),
            message: "boom".into()
        }
        .is_configuration());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DoctorError = io_err.into();
        assert!(matches!(err, DoctorError::Io(_)));
        assert!(!err.is_configuration());
    }
}
