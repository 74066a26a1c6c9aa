//! The installed-package index.
//!
//! The resolver only asks two questions of it, by package name: is this
//! built into the host, and is it installed. It never mutates the index.

use crate::config::Settings;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Packages that ship with the host editor and never need installing.
pub const HOST_BUILTINS: &[&str] = &[
    "cl-lib",
    "eldoc",
    "eglot",
    "flymake",
    "json",
    "org",
    "project",
    "seq",
    "use-package",
    "xref",
];

/// Answers availability questions by package name.
pub trait PackageIndex {
    /// Whether the package is built into the host.
    fn is_builtin(&self, name: &str) -> bool;

    /// Whether the package is installed.
    fn is_installed(&self, name: &str) -> bool;
}

/// Index backed by the packages directory: one subdirectory per installed
/// package.
#[derive(Debug, Clone)]
pub struct DirectoryIndex {
    packages_dir: PathBuf,
    builtins: HashSet<String>,
}

impl DirectoryIndex {
    /// Build the index for a distribution root.
    pub fn new(root: &Path, settings: &Settings) -> Self {
        let builtins = HOST_BUILTINS
            .iter()
            .map(|s| s.to_string())
            .chain(settings.builtin_packages.iter().cloned())
            .collect();
        Self {
            packages_dir: root.join(&settings.packages_dir),
            builtins,
        }
    }

    /// The directory scanned for installed packages.
    pub fn packages_dir(&self) -> &Path {
        &self.packages_dir
    }
}

impl PackageIndex for DirectoryIndex {
    fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }

    fn is_installed(&self, name: &str) -> bool {
        is_plain_name(name) && self.packages_dir.join(name).is_dir()
    }
}

/// A package name must stay inside the packages directory.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// In-memory index for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    builtins: HashSet<String>,
    installed: HashSet<String>,
}

impl MemoryIndex {
    /// An empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: mark packages as built in.
    pub fn with_builtins<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.builtins.extend(names.into_iter().map(Into::into));
        self
    }

    /// Builder: mark packages as installed.
    pub fn with_installed<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.installed.extend(names.into_iter().map(Into::into));
        self
    }
}

impl PackageIndex for MemoryIndex {
    fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }

    fn is_installed(&self, name: &str) -> bool {
        self.installed.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn directory_index_checks_package_dirs() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::default();
        fs::create_dir_all(temp.path().join(".local/packages/black")).unwrap();
        fs::write(temp.path().join(".local/packages/stray-file"), "").unwrap();

        let index = DirectoryIndex::new(temp.path(), &settings);
        assert!(index.is_installed("black"));
        assert!(!index.is_installed("flake8"));
        assert!(!index.is_installed("stray-file"));
    }

    #[test]
    fn directory_index_rejects_escaping_names() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".local/packages")).unwrap();
        fs::create_dir_all(temp.path().join(".local/outside")).unwrap();

        let index = DirectoryIndex::new(temp.path(), &Settings::default());
        assert!(!index.is_installed("../outside"));
        assert!(!index.is_installed(".."));
        assert!(!index.is_installed(""));
    }

    #[test]
    fn directory_index_builtins_include_settings() {
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            builtin_packages: vec!["evil".to_string()],
            ..Settings::default()
        };
        let index = DirectoryIndex::new(temp.path(), &settings);
        assert!(index.is_builtin("evil"));
        assert!(index.is_builtin("org"));
        assert!(!index.is_builtin("magit"));
    }

    #[test]
    fn custom_packages_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("elpa/magit")).unwrap();
        let settings = Settings {
            packages_dir: PathBuf::from("elpa"),
            ..Settings::default()
        };
        let index = DirectoryIndex::new(temp.path(), &settings);
        assert_eq!(index.packages_dir(), temp.path().join("elpa"));
        assert!(index.is_installed("magit"));
    }

    #[test]
    fn memory_index() {
        let index = MemoryIndex::new()
            .with_builtins(["evil"])
            .with_installed(["black"]);
        assert!(index.is_builtin("evil"));
        assert!(!index.is_installed("evil"));
        assert!(index.is_installed("black"));
        assert!(!index.is_builtin("black"));
    }
}
