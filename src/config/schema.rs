//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! module selection file (`init.yml`).

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Root structure of `init.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Selection {
    /// Selected modules grouped by category, in file order.
    #[serde(default, deserialize_with = "deserialize_categories")]
    pub modules: Vec<CategoryModules>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// The modules selected under one category heading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryModules {
    /// Category as written in the file (the `:` marker may be missing).
    pub category: String,
    /// Entries in file order.
    pub entries: Vec<ModuleEntry>,
}

/// A single module selection, either a bare name or a name with flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ModuleEntry {
    /// `- python`
    Name(String),
    /// `- { name: rust, flags: [+lsp] }`
    Detailed {
        name: String,
        #[serde(default)]
        flags: Vec<String>,
    },
}

impl ModuleEntry {
    /// The module name.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed { name, .. } => name,
        }
    }

    /// The variant flags (empty for bare names).
    pub fn flags(&self) -> &[String] {
        match self {
            Self::Name(_) => &[],
            Self::Detailed { flags, .. } => flags,
        }
    }
}

/// Global settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directories (relative to the root) searched for module directories, in order.
    pub module_paths: Vec<PathBuf>,

    /// Directory holding one subdirectory per installed package.
    pub packages_dir: PathBuf,

    /// Extra package names treated as built into the host.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub builtin_packages: Vec<String>,

    /// Output mode used when no CLI flag chose one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output: Option<OutputMode>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            module_paths: vec![PathBuf::from("modules")],
            packages_dir: PathBuf::from(".local/packages"),
            builtin_packages: Vec::new(),
            default_output: None,
        }
    }
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

fn deserialize_categories<'de, D>(deserializer: D) -> Result<Vec<CategoryModules>, D::Error>
where
    D: Deserializer<'de>,
{
    // serde_yaml::Mapping keeps insertion order, which is the registry order.
    let mapping = Option::<serde_yaml::Mapping>::deserialize(deserializer)?.unwrap_or_default();
    let mut categories = Vec::with_capacity(mapping.len());

    for (key, value) in mapping {
        let category = match key {
            serde_yaml::Value::String(s) => s,
            other => {
                return Err(D::Error::custom(format!(
                    "module category must be a string, found {:?}",
                    other
                )))
            }
        };
        let entries: Vec<ModuleEntry> = match value {
            serde_yaml::Value::Null => Vec::new(),
            value => serde_yaml::from_value(value).map_err(|e| {
                D::Error::custom(format!("invalid modules under '{}': {}", category, e))
            })?,
        };
        categories.push(CategoryModules { category, entries });
    }

    Ok(categories)
}
