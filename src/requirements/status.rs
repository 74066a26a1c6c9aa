//! Requirement classification results.
//!
//! Every declared requirement ends up in exactly one [`RequirementStatus`].
//! Only [`RequirementStatus::Missing`] produces a diagnostic event.

use crate::modules::ModuleKey;
use serde::Serialize;
use std::fmt;

/// Why a requirement counts as satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SatisfiedBy {
    /// Shipped with the host or flagged `built_in`
    BuiltIn,
    /// The recipe points at a local checkout that exists
    LocalRepo,
    /// Present in the installed-package index
    Installed,
}

/// The result of classifying a single requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequirementStatus {
    /// Available; nothing to report.
    Satisfied {
        /// Which rule matched
        by: SatisfiedBy,
    },

    /// The `disable` predicate held.
    SkippedDisabled,

    /// The `ignore` predicate held.
    SkippedIgnored,

    /// Not available. Reported as an error.
    Missing,
}

impl RequirementStatus {
    /// Whether the requirement is available.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied { .. })
    }

    /// Whether the requirement was skipped by a predicate.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::SkippedDisabled | Self::SkippedIgnored)
    }

    /// Whether the requirement is missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for SatisfiedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SatisfiedBy::BuiltIn => write!(f, "built-in"),
            SatisfiedBy::LocalRepo => write!(f, "local repo"),
            SatisfiedBy::Installed => write!(f, "installed"),
        }
    }
}

impl fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementStatus::Satisfied { by } => write!(f, "satisfied ({})", by),
            RequirementStatus::SkippedDisabled => write!(f, "disabled"),
            RequirementStatus::SkippedIgnored => write!(f, "ignored"),
            RequirementStatus::Missing => write!(f, "missing"),
        }
    }
}

/// One requirement's outcome, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub module: ModuleKey,
    pub package: String,
    pub status: RequirementStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_partition_statuses() {
        let satisfied = RequirementStatus::Satisfied {
            by: SatisfiedBy::BuiltIn,
        };
        assert!(satisfied.is_satisfied());
        assert!(!satisfied.is_skipped());
        assert!(RequirementStatus::SkippedDisabled.is_skipped());
        assert!(RequirementStatus::SkippedIgnored.is_skipped());
        assert!(RequirementStatus::Missing.is_missing());
        assert!(!RequirementStatus::Missing.is_satisfied());
    }

    #[test]
    fn display() {
        let status = RequirementStatus::Satisfied {
            by: SatisfiedBy::LocalRepo,
        };
        assert_eq!(status.to_string(), "satisfied (local repo)");
        assert_eq!(RequirementStatus::SkippedIgnored.to_string(), "ignored");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(RequirementStatus::Satisfied {
            by: SatisfiedBy::BuiltIn,
        })
        .unwrap();
        assert_eq!(json["kind"], "satisfied");
        assert_eq!(json["by"], "built_in");

        let json = serde_json::to_value(RequirementStatus::SkippedDisabled).unwrap();
        assert_eq!(json["kind"], "skipped_disabled");
    }
}
