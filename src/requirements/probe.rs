//! Host environment probe.
//!
//! Captures the facts that conditions are evaluated against: the platform,
//! the directories on `PATH`, and environment variables. Capturing once per
//! run keeps every module's evaluation consistent and lets tests substitute
//! a fake environment.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Platform for condition evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// A snapshot of the host environment.
#[derive(Debug, Clone)]
pub struct Environment {
    platform: Platform,
    path: Vec<PathBuf>,
    vars: HashMap<String, String>,
}

impl Environment {
    /// Capture the real process environment.
    pub fn capture() -> Self {
        Self {
            platform: Platform::current(),
            path: parse_system_path(),
            vars: std::env::vars().collect(),
        }
    }

    /// An empty environment on the given platform (no PATH, no variables).
    pub fn empty(platform: Platform) -> Self {
        Self {
            platform,
            path: Vec::new(),
            vars: HashMap::new(),
        }
    }

    /// Builder: replace the PATH entries.
    pub fn with_path(mut self, path: Vec<PathBuf>) -> Self {
        self.path = path;
        self
    }

    /// Builder: set an environment variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// The platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Whether a variable is set to a non-empty value.
    pub fn var_is_set(&self, key: &str) -> bool {
        self.vars.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Locate an executable on PATH.
    pub fn find_executable(&self, tool: &str) -> Option<PathBuf> {
        resolve_tool_path(tool, &self.path)
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if tool.is_empty() || tool.contains('/') || tool.contains('\\') {
        return None;
    }
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
        if cfg!(windows) {
            let exe = dir.join(format!("{}.exe", tool));
            if exe.is_file() {
                return Some(exe);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
