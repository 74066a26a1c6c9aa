//! Module self-checks.
//!
//! After a module's requirements are classified, its optional self-check
//! runs in the same module context and may report findings of any severity.

use super::predicate::{Condition, Predicate, PredicateContext};
use super::source::Verbosity;
use crate::error::{DoctorError, Result};
use crate::modules::ModuleDescriptor;
use crate::report::Severity;
use serde::Deserialize;
use std::fs;

/// Name of the self-check file in a module directory.
pub const DOCTOR_FILE: &str = "doctor.yml";

/// One finding reported by a self-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFinding {
    pub severity: Severity,
    pub message: String,
}

impl CheckFinding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// A module-supplied diagnostic routine.
pub trait SelfCheck {
    /// Run the module's self-check.
    ///
    /// Returns `Ok(None)` when the module has no routine.
    ///
    /// # Errors
    ///
    /// Returns `SelfCheck` when the routine exists but fails.
    fn run(
        &self,
        module: &ModuleDescriptor,
        ctx: &PredicateContext<'_>,
        verbosity: Verbosity,
    ) -> Result<Option<Vec<CheckFinding>>>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DoctorFile {
    checks: Vec<CheckRule>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CheckRule {
    info: Option<String>,
    warn: Option<String>,
    error: Option<String>,
    when: Option<Condition>,
    unless: Option<Condition>,
}

impl CheckRule {
    fn finding(&self) -> std::result::Result<CheckFinding, String> {
        match (&self.info, &self.warn, &self.error) {
            (Some(m), None, None) => Ok(CheckFinding::new(Severity::Info, m.as_str())),
            (None, Some(m), None) => Ok(CheckFinding::new(Severity::Warning, m.as_str())),
            (None, None, Some(m)) => Ok(CheckFinding::new(Severity::Error, m.as_str())),
            _ => Err("each check needs exactly one of info, warn or error".to_string()),
        }
    }

    fn fires(&self, ctx: &PredicateContext<'_>) -> bool {
        let when = self.when.as_ref().map_or(true, |c| c.evaluate(ctx));
        let unless = self.unless.as_ref().is_some_and(|c| c.evaluate(ctx));
        when && !unless
    }
}

/// Reads `doctor.yml` from each module's directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlSelfCheck;

impl YamlSelfCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SelfCheck for YamlSelfCheck {
    fn run(
        &self,
        module: &ModuleDescriptor,
        ctx: &PredicateContext<'_>,
        verbosity: Verbosity,
    ) -> Result<Option<Vec<CheckFinding>>> {
        let path = module.path.join(DOCTOR_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        let failure = |message: String| DoctorError::SelfCheck {
            module: module.key.to_string(),
            message,
        };

        let content = fs::read_to_string(&path).map_err(|e| failure(e.to_string()))?;
        let file: DoctorFile = if content.trim().is_empty() {
            DoctorFile::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| failure(e.to_string()))?
        };

        // Validate every rule before reporting any finding.
        let mut findings = Vec::new();
        for (i, rule) in file.checks.iter().enumerate() {
            let finding = rule
                .finding()
                .map_err(|e| failure(format!("check #{}: {}", i + 1, e)))?;
            if rule.fires(ctx) {
                findings.push(finding);
            }
        }

        if verbosity.is_verbose() {
            tracing::debug!(
                "{}: {} of {} checks fired",
                path.display(),
                findings.len(),
                file.checks.len()
            );
        }
        Ok(Some(findings))
    }
}
