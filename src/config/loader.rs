//! Selection file discovery and loading.
//!
//! This module finds the distribution root and loads the module
//! selection file from it.

use crate::config::schema::Selection;
use crate::config::validator::validate;
use crate::error::{DoctorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the module selection file inside the distribution root.
pub const SELECTION_FILE: &str = "init.yml";

/// Directory name used for the default distribution root under `$HOME`.
pub const DEFAULT_ROOT_DIR: &str = ".distro.d";

/// Paths to the configuration files of a distribution root.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// The distribution root itself.
    pub root: PathBuf,

    /// Selection file: <root>/init.yml
    pub selection: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given distribution root.
    pub fn discover(root: &Path) -> Self {
        let path = root.join(SELECTION_FILE);
        Self {
            root: root.to_path_buf(),
            selection: path.is_file().then_some(path),
        }
    }

    /// Check if the selection file exists.
    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    /// Where the selection file is expected to be.
    pub fn expected_selection(&self) -> PathBuf {
        self.root.join(SELECTION_FILE)
    }
}

/// The default distribution root (`~/.distro.d`).
///
/// Falls back to the current directory when no home directory is known.
pub fn default_root() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_ROOT_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load, parse and validate the selection file of a distribution root.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `init.yml` doesn't exist.
/// Returns `ConfigParseError` if the file can't be read or the YAML is invalid.
/// Returns `ConfigValidationError` if an entry is malformed.
pub fn load_selection(root: &Path) -> Result<Selection> {
    let paths = ConfigPaths::discover(root);
    let path = paths.expected_selection();
    let content = fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DoctorError::ConfigNotFound { path: path.clone() }
        } else {
            DoctorError::ConfigParseError {
                path: path.clone(),
                message: e.to_string(),
            }
        }
    })?;

    let selection = parse_selection(&content, &path)?;
    validate(&selection)?;
    tracing::debug!(
        "Loaded selection from {} ({} categories)",
        path.display(),
        selection.modules.len()
    );
    Ok(selection)
}

/// Parse YAML content into a [`Selection`].
///
/// An empty file is an empty selection.
pub fn parse_selection(content: &str, source_path: &Path) -> Result<Selection> {
    if content.trim().is_empty() {
        return Ok(Selection::default());
    }
    serde_yaml::from_str(content).map_err(|e| DoctorError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
