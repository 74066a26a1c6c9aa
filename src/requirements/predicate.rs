//! Boolean predicates for `disable`, `ignore` and self-check conditions.
//!
//! The resolver only ever needs a yes/no answer per requirement. Anything
//! implementing [`Predicate`] can supply it: the declarative [`Condition`]
//! read from YAML, a plain `bool`, or a closure.

use crate::modules::{ModuleDescriptor, ModuleKey, ModuleRegistry};
use crate::requirements::probe::{Environment, Platform};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// What a predicate can look at.
pub struct PredicateContext<'a> {
    /// The module whose declarations are being evaluated
    pub module: &'a ModuleDescriptor,
    /// All enabled modules
    pub registry: &'a ModuleRegistry,
    /// Host environment snapshot
    pub env: &'a Environment,
}

/// A boolean-valued test evaluated in a module's context.
pub trait Predicate {
    /// Evaluate the predicate.
    fn evaluate(&self, ctx: &PredicateContext<'_>) -> bool;
}

/// A shareable predicate handle.
pub type SharedPredicate = Arc<dyn Predicate + Send + Sync>;

impl Predicate for bool {
    fn evaluate(&self, _ctx: &PredicateContext<'_>) -> bool {
        *self
    }
}

impl<F> Predicate for F
where
    F: Fn(&PredicateContext<'_>) -> bool,
{
    fn evaluate(&self, ctx: &PredicateContext<'_>) -> bool {
        self(ctx)
    }
}

/// Declarative condition as written in module files.
///
/// ```yaml
/// disable: { not: { flag: +lsp } }
/// ignore: { any: [{ os: windows }, { executable: flake8 }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    /// A literal `true` / `false`.
    Literal(bool),
    /// A test expression.
    Expr(ConditionExpr),
}

/// The non-literal forms of a [`Condition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", deny_unknown_fields)]
pub enum ConditionExpr {
    /// The owning module was enabled with this flag.
    Flag(String),
    /// Another module is enabled.
    Module(ModuleRef),
    /// An executable is on PATH.
    Executable(String),
    /// Running on this platform.
    Os(Platform),
    /// An environment variable is set and non-empty.
    Env(String),
    /// Negation.
    Not(Box<Condition>),
    /// Every sub-condition holds (true when empty).
    All(Vec<Condition>),
    /// At least one sub-condition holds (false when empty).
    Any(Vec<Condition>),
}

/// A module reference written as `":category name"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleRef(pub ModuleKey);

impl TryFrom<String> for ModuleRef {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse().map(ModuleRef)
    }
}

impl From<ModuleRef> for String {
    fn from(value: ModuleRef) -> Self {
        value.0.to_string()
    }
}

impl Default for Condition {
    fn default() -> Self {
        Condition::Literal(false)
    }
}

impl Predicate for Condition {
    fn evaluate(&self, ctx: &PredicateContext<'_>) -> bool {
        match self {
            Condition::Literal(value) => *value,
            Condition::Expr(expr) => expr.evaluate(ctx),
        }
    }
}

impl Predicate for ConditionExpr {
    fn evaluate(&self, ctx: &PredicateContext<'_>) -> bool {
        match self {
            ConditionExpr::Flag(flag) => ctx.module.has_flag(flag),
            ConditionExpr::Module(ModuleRef(key)) => ctx.registry.contains(key),
            ConditionExpr::Executable(tool) => ctx.env.find_executable(tool).is_some(),
            ConditionExpr::Os(platform) => ctx.env.platform() == *platform,
            ConditionExpr::Env(var) => ctx.env.var_is_set(var),
            ConditionExpr::Not(inner) => !inner.evaluate(ctx),
            ConditionExpr::All(items) => items.iter().all(|c| c.evaluate(ctx)),
            ConditionExpr::Any(items) => items.iter().any(|c| c.evaluate(ctx)),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Literal(value) => write!(f, "{}", value),
            Condition::Expr(expr) => match expr {
                ConditionExpr::Flag(flag) => write!(f, "flag {}", flag),
                ConditionExpr::Module(ModuleRef(key)) => write!(f, "module {}", key),
                ConditionExpr::Executable(tool) => write!(f, "executable {}", tool),
                ConditionExpr::Os(platform) => write!(f, "os {:?}", platform),
                ConditionExpr::Env(var) => write!(f, "env {}", var),
                ConditionExpr::Not(inner) => write!(f, "not ({})", inner),
                ConditionExpr::All(items) => write_list(f, "all", items),
                ConditionExpr::Any(items) => write_list(f, "any", items),
            },
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, op: &str, items: &[Condition]) -> fmt::Result {
    let parts: Vec<String> = items.iter().map(|c| c.to_string()).collect();
    write!(f, "{} [{}]", op, parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        module: ModuleDescriptor,
        registry: ModuleRegistry,
        env: Environment,
    }

    impl Fixture {
        fn new() -> Self {
            let module = ModuleDescriptor::new(ModuleKey::new("lang", "python"), "/m/lang/python")
                .with_flags(["+lsp"]);
            let registry = ModuleRegistry::from_descriptors(vec![
                module.clone(),
                ModuleDescriptor::new(ModuleKey::new("tools", "lsp"), "/m/tools/lsp"),
            ]);
            Self {
                module,
                registry,
                env: Environment::empty(Platform::Linux).with_var("CONDA_PREFIX", "/opt/conda"),
            }
        }

        fn ctx(&self) -> PredicateContext<'_> {
            PredicateContext {
                module: &self.module,
                registry: &self.registry,
                env: &self.env,
            }
        }

        fn eval(&self, yaml: &str) -> bool {
            let condition: Condition = serde_yaml::from_str(yaml).unwrap();
            condition.evaluate(&self.ctx())
        }
    }

    #[test]
    fn literals() {
        let fx = Fixture::new();
        assert!(fx.eval("true"));
        assert!(!fx.eval("false"));
    }

    #[test]
    fn flag_checks_owning_module() {
        let fx = Fixture::new();
        assert!(fx.eval("{ flag: +lsp }"));
        assert!(!fx.eval("{ flag: +pyright }"));
    }

    #[test]
    fn module_checks_registry() {
        let fx = Fixture::new();
        assert!(fx.eval("{ module: ':tools lsp' }"));
        assert!(!fx.eval("{ module: ':tools magit' }"));
    }

    #[test]
    fn os_and_env() {
        let fx = Fixture::new();
        assert!(fx.eval("{ os: linux }"));
        assert!(!fx.eval("{ os: windows }"));
        assert!(fx.eval("{ env: CONDA_PREFIX }"));
        assert!(!fx.eval("{ env: PYENV_ROOT }"));
    }

    #[test]
    fn executable_uses_environment_path() {
        let fx = Fixture::new();
        assert!(!fx.eval("{ executable: flake8 }"));
    }

    #[test]
    fn combinators() {
        let fx = Fixture::new();
        assert!(fx.eval("{ not: { flag: +pyright } }"));
        assert!(fx.eval("{ all: [{ flag: +lsp }, { os: linux }] }"));
        assert!(!fx.eval("{ all: [{ flag: +lsp }, { os: macos }] }"));
        assert!(fx.eval("{ any: [false, { env: CONDA_PREFIX }] }"));
        assert!(fx.eval("{ all: [] }"));
        assert!(!fx.eval("{ any: [] }"));
    }

    #[test]
    fn unknown_condition_is_rejected() {
        assert!(serde_yaml::from_str::<Condition>("{ featurep: +lsp }").is_err());
        assert!(serde_yaml::from_str::<Condition>("{ module: 'python' }").is_err());
    }

    #[test]
    fn closures_and_bools_are_predicates() {
        let fx = Fixture::new();
        let ctx = fx.ctx();
        assert!(true.evaluate(&ctx));
        let has_two_modules = |c: &PredicateContext<'_>| c.registry.len() == 2;
        assert!(has_two_modules.evaluate(&ctx));
    }

    #[test]
    fn display_is_readable() {
        let condition: Condition =
            serde_yaml::from_str("{ not: { any: [{ flag: +lsp }, { executable: rg }] } }").unwrap();
        assert_eq!(condition.to_string(), "not (any [flag +lsp, executable rg])");
    }
}
