//! Requirement sources.
//!
//! A [`RequirementSource`] fills a module's [`PackageScope`]. The default
//! [`YamlRequirementSource`] reads `packages.yml` from the module directory.

use super::package::{PackageRequirement, PackageScope, Recipe};
use super::predicate::Condition;
use crate::error::{DoctorError, Result};
use crate::modules::ModuleDescriptor;
use crate::ui::OutputMode;
use serde::Deserialize;
use std::fs;

/// Name of the package-requirement file in a module directory.
pub const PACKAGES_FILE: &str = "packages.yml";

/// How chatty collaborators may be while loading module files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// Whether per-file details should be logged.
    pub fn is_verbose(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

impl From<OutputMode> for Verbosity {
    fn from(mode: OutputMode) -> Self {
        match mode {
            OutputMode::Verbose => Self::Verbose,
            OutputMode::Normal => Self::Normal,
            OutputMode::Quiet | OutputMode::Silent => Self::Quiet,
        }
    }
}

/// What a source found for a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOutcome {
    /// The module has a requirement file; its requirements are in the scope.
    Declared,
    /// The module has no requirement file.
    Absent,
}

/// Declares a module's requirements into a scope.
pub trait RequirementSource {
    /// Declare `module`'s requirements into `scope`.
    ///
    /// # Errors
    ///
    /// Returns `RequirementLoad` when the module's declarations exist but
    /// cannot be read.
    fn declare(
        &self,
        module: &ModuleDescriptor,
        scope: &mut PackageScope,
        verbosity: Verbosity,
    ) -> Result<SourceOutcome>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PackagesFile {
    packages: Vec<PackageSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PackageSpec {
    name: String,
    #[serde(default)]
    disable: Option<Condition>,
    #[serde(default)]
    ignore: Option<Condition>,
    #[serde(default)]
    built_in: bool,
    #[serde(default)]
    recipe: Option<Recipe>,
}

impl From<PackageSpec> for PackageRequirement {
    fn from(spec: PackageSpec) -> Self {
        let mut requirement = PackageRequirement::new(spec.name);
        if let Some(condition) = spec.disable {
            requirement = requirement.disable_when(condition);
        }
        if let Some(condition) = spec.ignore {
            requirement = requirement.ignore_when(condition);
        }
        if spec.built_in {
            requirement = requirement.built_in();
        }
        if let Some(recipe) = spec.recipe {
            requirement = requirement.with_recipe(recipe);
        }
        requirement
    }
}

/// Reads `packages.yml` from each module's directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlRequirementSource;

impl YamlRequirementSource {
    pub fn new() -> Self {
        Self
    }
}

impl RequirementSource for YamlRequirementSource {
    fn declare(
        &self,
        module: &ModuleDescriptor,
        scope: &mut PackageScope,
        verbosity: Verbosity,
    ) -> Result<SourceOutcome> {
        let path = module.path.join(PACKAGES_FILE);
        if !path.is_file() {
            return Ok(SourceOutcome::Absent);
        }

        let load_error = |message: String| DoctorError::RequirementLoad {
            module: module.key.to_string(),
            message,
        };

        let content = fs::read_to_string(&path).map_err(|e| load_error(e.to_string()))?;
        let file: PackagesFile = if content.trim().is_empty() {
            PackagesFile::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| load_error(e.to_string()))?
        };

        if verbosity.is_verbose() {
            tracing::debug!(
                "Read {} package(s) from {}",
                file.packages.len(),
                path.display()
            );
        }

        for spec in file.packages {
            if spec.name.trim().is_empty() {
                return Err(load_error("package name must not be empty".to_string()));
            }
            scope.declare(spec.into());
        }
        Ok(SourceOutcome::Declared)
    }
}
