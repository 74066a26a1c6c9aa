//! Module identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one module of the catalog: a `:category` plus a name.
///
/// The category always carries its leading `:` marker; constructors add it
/// when missing so `lang` and `:lang` name the same category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleKey {
    category: String,
    name: String,
}

impl ModuleKey {
    /// Create a key, normalizing the category marker.
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        let category = category.into();
        let category = if category.starts_with(':') {
            category
        } else {
            format!(":{}", category)
        };
        Self {
            category,
            name: name.into(),
        }
    }

    /// Category including the `:` marker.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Category without the marker, as used for directory names.
    pub fn category_dir(&self) -> &str {
        self.category.trim_start_matches(':')
    }

    /// Module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dotted-pair rendering used to tag report lines, e.g. `(:lang . python)`.
    pub fn tagged(&self) -> String {
        format!("({} . {})", self.category, self.name)
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category, self.name)
    }
}

impl FromStr for ModuleKey {
    type Err = String;

    /// Parse `":lang python"` (the marker is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(category), Some(name), None) if category != ":" => {
                Ok(ModuleKey::new(category, name))
            }
            _ => Err(format!(
                "invalid module '{}', expected \":category name\"",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_normalized() {
        assert_eq!(ModuleKey::new("lang", "python"), ModuleKey::new(":lang", "python"));
        assert_eq!(ModuleKey::new("lang", "python").category(), ":lang");
    }

    #[test]
    fn category_dir_strips_marker() {
        assert_eq!(ModuleKey::new(":ui", "modeline").category_dir(), "ui");
    }

    #[test]
    fn display_and_tagged() {
        let key = ModuleKey::new(":lang", "python");
        assert_eq!(key.to_string(), ":lang python");
        assert_eq!(key.tagged(), "(:lang . python)");
    }

    #[test]
    fn parses_from_string() {
        let key: ModuleKey = ":editor evil".parse().unwrap();
        assert_eq!(key, ModuleKey::new("editor", "evil"));
        let key: ModuleKey = "tools   magit".parse().unwrap();
        assert_eq!(key.name(), "magit");
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("python".parse::<ModuleKey>().is_err());
        assert!(":lang python extra".parse::<ModuleKey>().is_err());
        assert!(": python".parse::<ModuleKey>().is_err());
        assert!("".parse::<ModuleKey>().is_err());
    }
}
