//! Module registry loading.
//!
//! Turns the user's selection into an ordered set of [`ModuleDescriptor`]s,
//! locating each selected module's directory on the configured module paths.
//! Loading is all-or-nothing: any missing module fails the whole registry.

use crate::config::validator::is_path_segment;
use crate::config::{Selection, Settings};
use crate::error::{DoctorError, Result};
use crate::modules::key::ModuleKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional catalog metadata file in a module directory.
pub const MODULE_META_FILE: &str = "module.yml";

/// Catalog metadata for a module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleMeta {
    /// One-line description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Documentation link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

/// A selected module as known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    /// Module identity
    pub key: ModuleKey,
    /// Enabled variant flags, in selection order, without duplicates
    pub flags: Vec<String>,
    /// The module's directory
    pub path: PathBuf,
    /// Catalog metadata
    pub meta: ModuleMeta,
}

impl ModuleDescriptor {
    /// Create a descriptor with no flags or metadata.
    pub fn new(key: ModuleKey, path: impl Into<PathBuf>) -> Self {
        Self {
            key,
            flags: Vec::new(),
            path: path.into(),
            meta: ModuleMeta::default(),
        }
    }

    /// Builder: add flags.
    pub fn with_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for flag in flags {
            self.add_flag(flag.into());
        }
        self
    }

    /// Whether a variant flag is enabled.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    fn add_flag(&mut self, flag: String) {
        if !self.has_flag(&flag) {
            self.flags.push(flag);
        }
    }
}

/// The enabled modules, in selection order.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: Vec<ModuleDescriptor>,
    index: HashMap<ModuleKey, usize>,
}

impl ModuleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from descriptors, merging duplicate keys.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = ModuleDescriptor>) -> Self {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.insert(descriptor);
        }
        registry
    }

    /// Load the registry for a distribution root.
    ///
    /// # Errors
    ///
    /// Returns `ModuleNotFound` when a selected module has no directory,
    /// `ConfigValidationError` when a category or name is not a single path
    /// segment, `ConfigParseError` when a module's metadata file is malformed
    /// or unreadable.
    pub fn load(root: &Path, selection: &Selection) -> Result<Self> {
        let mut registry = Self::new();

        for block in &selection.modules {
            for entry in &block.entries {
                let key = ModuleKey::new(block.category.as_str(), entry.name());

                if let Some(&i) = registry.index.get(&key) {
                    tracing::debug!("Merging duplicate selection of {}", key);
                    for flag in entry.flags() {
                        registry.modules[i].add_flag(flag.clone());
                    }
                    continue;
                }

                let path = locate_module(root, &selection.settings, &key)?;
                let meta = load_meta(&path)?;
                let mut descriptor =
                    ModuleDescriptor::new(key, path).with_flags(entry.flags().iter().cloned());
                descriptor.meta = meta;
                registry.insert(descriptor);
            }
        }

        tracing::debug!("Registry loaded with {} modules", registry.len());
        Ok(registry)
    }

    fn insert(&mut self, descriptor: ModuleDescriptor) {
        match self.index.get(&descriptor.key) {
            Some(&i) => {
                for flag in descriptor.flags {
                    self.modules[i].add_flag(flag);
                }
            }
            None => {
                self.index.insert(descriptor.key.clone(), self.modules.len());
                self.modules.push(descriptor);
            }
        }
    }

    /// Iterate modules in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.iter()
    }

    /// Look up a module by key.
    pub fn get(&self, key: &ModuleKey) -> Option<&ModuleDescriptor> {
        self.index.get(key).map(|&i| &self.modules[i])
    }

    /// Whether a module is enabled.
    pub fn contains(&self, key: &ModuleKey) -> bool {
        self.index.contains_key(key)
    }

    /// Number of enabled modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether no module is enabled.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Find a module's directory on the configured module paths (first hit wins).
fn locate_module(root: &Path, settings: &Settings, key: &ModuleKey) -> Result<PathBuf> {
    if !is_path_segment(key.category_dir()) || !is_path_segment(key.name()) {
        return Err(DoctorError::ConfigValidationError {
            message: format!("Module {} does not name a module directory", key),
        });
    }

    for base in &settings.module_paths {
        let candidate = root.join(base).join(key.category_dir()).join(key.name());
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }

    let searched = settings
        .module_paths
        .iter()
        .map(|p| root.join(p).display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(DoctorError::ModuleNotFound {
        module: key.to_string(),
        searched,
    })
}

fn load_meta(module_dir: &Path) -> Result<ModuleMeta> {
    let path = module_dir.join(MODULE_META_FILE);
    if !path.is_file() {
        return Ok(ModuleMeta::default());
    }
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ModuleMeta::default()),
        Err(e) => {
            return Err(DoctorError::ConfigParseError {
                path,
                message: e.to_string(),
            })
        }
    };
    if content.trim().is_empty() {
        return Ok(ModuleMeta::default());
    }
    serde_yaml::from_str(&content).map_err(|e| DoctorError::ConfigParseError {
        path,
        message: e.to_string(),
    })
}
