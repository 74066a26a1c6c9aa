//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides the canonical icons and colors used for every
//! report line, whether it comes from a diagnostic event or a verbose note.

use super::theme::DoctorTheme;
use crate::report::Severity;

/// Canonical status kinds used across all report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Informational finding.
    Info,
    /// Non-fatal warning.
    Warning,
    /// Error finding.
    Error,
    /// Check intentionally not performed.
    Skipped,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "→",
            Self::Warning => "⚠",
            Self::Error => "✗",
            Self::Skipped => "○",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Info => "[info]",
            Self::Warning => "[warn]",
            Self::Error => "[error]",
            Self::Skipped => "[skip]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &DoctorTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Info => theme.info.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Error => theme.error.apply_to(icon).to_string(),
            Self::Skipped => theme.dim.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message in the matching color.
    pub fn format(self, theme: &DoctorTheme, msg: &str) -> String {
        let body = match self {
            Self::Success => theme.success.apply_to(msg).to_string(),
            Self::Info => msg.to_string(),
            Self::Warning => theme.warning.apply_to(msg).to_string(),
            Self::Error => theme.error.apply_to(msg).to_string(),
            Self::Skipped => theme.dim.apply_to(msg).to_string(),
        };
        format!("{} {}", self.styled(theme), body)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<Severity> for StatusKind {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Self::Info,
            Severity::Warning => Self::Warning,
            Severity::Error => Self::Error,
        }
    }
}
