//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use moddoctor::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_status(StatusKind::Error, "Missing package: flake8", 1);
//! ui.success("Done!");
//!
//! assert!(ui.has_status(StatusKind::Error, "flake8"));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use super::{OutputMode, StatusKind, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures everything regardless of output mode so tests can assert on
/// the full stream; [`MockUI::visible_statuses`] applies the mode filter.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<(String, usize)>,
    successes: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    modules: Vec<String>,
    statuses: Vec<(StatusKind, String, usize)>,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured plain messages (without indentation).
    pub fn messages(&self) -> Vec<String> {
        self.messages.iter().map(|(m, _)| m.clone()).collect()
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured module tags.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Get all captured status lines as (kind, message, indent).
    pub fn statuses(&self) -> &[(StatusKind, String, usize)] {
        &self.statuses
    }

    /// Status lines that the current output mode would display.
    pub fn visible_statuses(&self) -> Vec<&(StatusKind, String, usize)> {
        self.statuses
            .iter()
            .filter(|(kind, _, _)| super::status_visible(self.mode, *kind))
            .collect()
    }

    /// Every captured line in arrival order, indented as it would be shown.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|(m, _)| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a status line of this kind containing `msg` was shown.
    pub fn has_status(&self, kind: StatusKind, msg: &str) -> bool {
        self.statuses
            .iter()
            .any(|(k, m, _)| *k == kind && m.contains(msg))
    }

    /// Count status lines of a given kind.
    pub fn status_count(&self, kind: StatusKind) -> usize {
        self.statuses.iter().filter(|(k, _, _)| *k == kind).count()
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.errors.clear();
        self.headers.clear();
        self.modules.clear();
        self.statuses.clear();
        self.transcript.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message_indented(&mut self, msg: &str, indent: usize) {
        self.messages.push((msg.to_string(), indent));
        self.transcript
            .push(format!("{}{}", super::indentation(indent), msg));
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.transcript.push(format!("✓ {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.transcript.push(format!("✗ {}", msg));
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.transcript.push(title.to_string());
    }

    fn show_module(&mut self, tag: &str, indent: usize) {
        self.modules.push(tag.to_string());
        self.message_indented(tag, indent);
    }

    fn show_status(&mut self, kind: StatusKind, msg: &str, indent: usize) {
        self.statuses.push((kind, msg.to_string(), indent));
        self.transcript.push(format!(
            "{}{}",
            super::indentation(indent),
            kind.format_plain(msg)
        ));
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_statuses_with_indent() {
        let mut ui = MockUI::new();
        ui.show_status(StatusKind::Warning, "careful", 2);
        assert_eq!(ui.statuses(), &[(StatusKind::Warning, "careful".to_string(), 2)]);
        assert_eq!(ui.transcript(), &["    [warn] careful".to_string()]);
    }

    #[test]
    fn visible_statuses_follow_mode() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.show_status(StatusKind::Info, "note", 0);
        ui.show_status(StatusKind::Error, "broken", 0);
        assert_eq!(ui.statuses().len(), 2);
        assert_eq!(ui.visible_statuses().len(), 1);
    }

    #[test]
    fn counts_and_clear() {
        let mut ui = MockUI::new();
        ui.show_status(StatusKind::Error, "a", 0);
        ui.show_status(StatusKind::Error, "b", 0);
        ui.message("hello");
        assert_eq!(ui.status_count(StatusKind::Error), 2);
        assert!(ui.has_message("hell"));
        ui.clear();
        assert!(ui.statuses().is_empty());
        assert!(ui.transcript().is_empty());
    }

    #[test]
    fn interactive_flag() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
