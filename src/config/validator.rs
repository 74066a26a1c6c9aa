//! Selection file validation rules.
//!
//! This module validates the selection for correctness:
//! - Categories and module names must be non-empty identifiers that name a
//!   single directory under a module path
//! - Flags must start with `+` or `-`
//! - At least one module path must be configured

use crate::config::schema::Selection;
use crate::error::{DoctorError, Result};
use std::path::{Component, Path};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a selection and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_selection(selection: &Selection) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for block in &selection.modules {
        let category = block.category.trim_start_matches(':');
        if !is_identifier(category) || !is_path_segment(category) {
            errors.push(ValidationError::new(
                "invalid-category",
                format!("Invalid module category '{}'", block.category),
            ));
        }

        for entry in &block.entries {
            if !is_identifier(entry.name()) || !is_path_segment(entry.name()) {
                errors.push(ValidationError::new(
                    "invalid-module-name",
                    format!(
                        "Invalid module name '{}' in category '{}'",
                        entry.name(),
                        block.category
                    ),
                ));
            }
            for flag in entry.flags() {
                let valid = (flag.starts_with('+') || flag.starts_with('-'))
                    && is_identifier(&flag[1..]);
                if !valid {
                    errors.push(ValidationError::new(
                        "invalid-flag",
                        format!(
                            "Flag '{}' on module '{}' must look like +name or -name",
                            flag,
                            entry.name()
                        ),
                    ));
                }
            }
        }
    }

    if selection.settings.module_paths.is_empty() {
        errors.push(ValidationError::new(
            "no-module-paths",
            "settings.module_paths must list at least one directory".to_string(),
        ));
    }

    errors
}

/// Validate a selection, failing with the first error.
pub fn validate(selection: &Selection) -> Result<()> {
    match validate_selection(selection).into_iter().next() {
        Some(error) => Err(DoctorError::ConfigValidationError {
            message: error.message,
        }),
        None => Ok(()),
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == ':')
}

/// Whether `s` names exactly one directory entry, so joining it onto a
/// module path cannot leave that path.
pub(crate) fn is_path_segment(s: &str) -> bool {
    if s.contains('/') || s.contains('\\') {
        return false;
    }
    let mut components = Path::new(s).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Selection {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn valid_selection_passes() {
        let selection = parse("modules:\n  lang: [python, {name: rust, flags: [+lsp, -tree]}]\n");
        assert!(validate_selection(&selection).is_empty());
        assert!(validate(&selection).is_ok());
    }

    #[test]
    fn whitespace_in_name_is_rejected() {
        let selection = parse("modules:\n  lang: ['py thon']\n");
        let errors = validate_selection(&selection);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "invalid-module-name");
    }

    #[test]
    fn bare_marker_category_is_rejected() {
        let selection = parse("modules:\n  ':': [python]\n");
        let errors = validate_selection(&selection);
        assert_eq!(errors[0].rule, "invalid-category");
    }

    #[test]
    fn flag_without_sign_is_rejected() {
        let selection = parse("modules:\n  lang: [{name: rust, flags: [lsp]}]\n");
        let errors = validate_selection(&selection);
        assert_eq!(errors[0].rule, "invalid-flag");
    }

    #[test]
    fn all_errors_are_collected() {
        let selection = parse("modules:\n  lang: ['a b', {name: rust, flags: [x, '+']}]\n");
        assert_eq!(validate_selection(&selection).len(), 3);
    }

    #[test]
    fn module_names_cannot_leave_the_module_path() {
        let selection = parse("modules:\n  lang: ['../x', 'a/b', '..', '.']\n");
        let errors = validate_selection(&selection);
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().all(|e| e.rule == "invalid-module-name"));
    }

    #[test]
    fn categories_cannot_leave_the_module_path() {
        let selection = parse("modules:\n  '../lang': [python]\n  ':a/b': [rust]\n");
        let errors = validate_selection(&selection);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.rule == "invalid-category"));
    }

    #[test]
    fn path_segments() {
        assert!(is_path_segment("python"));
        assert!(is_path_segment("tree-sitter"));
        assert!(!is_path_segment("../x"));
        assert!(!is_path_segment("a/b"));
        assert!(!is_path_segment("a\\b"));
        assert!(!is_path_segment(".."));
        assert!(!is_path_segment("/abs"));
    }

    #[test]
    fn empty_module_paths_fail_validation() {
        let selection = parse("settings:\n  module_paths: []\n");
        let err = validate(&selection).unwrap_err();
        assert!(matches!(err, DoctorError::ConfigValidationError { .. }));
    }
}
