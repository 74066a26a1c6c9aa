//! Diagnostic events.
//!
//! A [`DiagnosticEvent`] is one finding produced during a run. Events are
//! appended to the reporter's log in arrival order and never modified.

use crate::modules::ModuleKey;
use serde::Serialize;
use std::fmt;

/// Severity level of a diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, does not count toward the summary.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error: something the user needs to fix.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One reported finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticEvent {
    /// Severity of this event.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Module the event belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleKey>,
    /// Package the event is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

impl DiagnosticEvent {
    /// Create a new event.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            module: None,
            package: None,
        }
    }

    /// Create an info event.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Create a warning event.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an error event.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Tag the event with its module.
    pub fn with_module(mut self, module: ModuleKey) -> Self {
        self.module = Some(module);
        self
    }

    /// Tag the event with a package name.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}
