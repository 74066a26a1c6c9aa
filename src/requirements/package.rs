//! Package requirements and the per-module declaration scope.

use super::predicate::{Predicate, PredicateContext, SharedPredicate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Where a package comes from.
///
/// Only `local_repo` affects classification; the other fields are carried
/// for display and JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Recipe {
    /// Forge host, e.g. `github`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Repository, e.g. `emacs-lsp/lsp-pyright`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Branch to follow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Local checkout, relative to the module directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_repo: Option<PathBuf>,
}

/// One package a module declares it needs.
#[derive(Clone)]
pub struct PackageRequirement {
    /// Package name; unique within a module's scope
    pub name: String,
    /// Skip the requirement when this holds
    pub disable: Option<SharedPredicate>,
    /// Skip the requirement when this holds (checked after `disable`)
    pub ignore: Option<SharedPredicate>,
    /// Treat as always available
    pub built_in: bool,
    /// Source information
    pub recipe: Option<Recipe>,
}

impl PackageRequirement {
    /// A plain requirement with no predicates.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            disable: None,
            ignore: None,
            built_in: false,
            recipe: None,
        }
    }

    /// Builder: set the `disable` predicate.
    pub fn disable_when(mut self, predicate: impl Predicate + Send + Sync + 'static) -> Self {
        self.disable = Some(Arc::new(predicate));
        self
    }

    /// Builder: set the `ignore` predicate.
    pub fn ignore_when(mut self, predicate: impl Predicate + Send + Sync + 'static) -> Self {
        self.ignore = Some(Arc::new(predicate));
        self
    }

    /// Builder: mark as built in.
    pub fn built_in(mut self) -> Self {
        self.built_in = true;
        self
    }

    /// Builder: attach a recipe.
    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipe = Some(recipe);
        self
    }

    /// Whether the `disable` predicate holds.
    pub fn is_disabled(&self, ctx: &PredicateContext<'_>) -> bool {
        self.disable.as_ref().is_some_and(|p| p.evaluate(ctx))
    }

    /// Whether the `ignore` predicate holds.
    pub fn is_ignored(&self, ctx: &PredicateContext<'_>) -> bool {
        self.ignore.as_ref().is_some_and(|p| p.evaluate(ctx))
    }
}

impl fmt::Debug for PackageRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageRequirement")
            .field("name", &self.name)
            .field("disable", &self.disable.is_some())
            .field("ignore", &self.ignore.is_some())
            .field("built_in", &self.built_in)
            .field("recipe", &self.recipe)
            .finish()
    }
}

/// Collects the requirements one module declares.
///
/// A fresh scope is created for every module so declarations never leak
/// between modules. Declaring a name twice replaces the earlier
/// declaration in place.
#[derive(Debug, Default)]
pub struct PackageScope {
    requirements: Vec<PackageRequirement>,
}

impl PackageScope {
    /// An empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a requirement.
    pub fn declare(&mut self, requirement: PackageRequirement) {
        match self
            .requirements
            .iter_mut()
            .find(|r| r.name == requirement.name)
        {
            Some(existing) => {
                tracing::debug!("Package {} redeclared, replacing", requirement.name);
                *existing = requirement;
            }
            None => self.requirements.push(requirement),
        }
    }

    /// Number of declared requirements.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Whether nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Declared requirements, in declaration order.
    pub fn requirements(&self) -> &[PackageRequirement] {
        &self.requirements
    }

    /// Consume the scope.
    pub fn into_requirements(self) -> Vec<PackageRequirement> {
        self.requirements
    }
}
