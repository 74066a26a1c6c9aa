//! Terminal user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments and pipes
//! - [`MockUI`] for capturing output in tests
//! - [`NullUI`] when stdout carries JSON
//!
//! # Example
//!
//! ```
//! use moddoctor::ui::{create_ui, OutputMode, StatusKind};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_status(StatusKind::Warning, "Couldn't find black", 1);
//! ui.success("Everything seems fine");
//! ```

pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod null;
pub mod output;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use null::NullUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DoctorTheme};

/// Width of one indentation level in report output.
pub const INDENT_WIDTH: usize = 2;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a plain message at the given indentation level.
    fn message_indented(&mut self, msg: &str, indent: usize);

    /// Display a message to the user.
    fn message(&mut self, msg: &str) {
        self.message_indented(msg, 0);
    }

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a module tag such as `(:lang . python)` at the given indentation.
    fn show_module(&mut self, tag: &str, indent: usize) {
        self.message_indented(tag, indent);
    }

    /// Show an indented, severity-colored status line.
    ///
    /// Error lines are shown in every output mode.
    fn show_status(&mut self, kind: StatusKind, msg: &str, indent: usize);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Leading whitespace for an indentation level.
pub fn indentation(level: usize) -> String {
    " ".repeat(level * INDENT_WIDTH)
}

/// Whether a status line of this kind is visible in the given mode.
pub fn status_visible(mode: OutputMode, kind: StatusKind) -> bool {
    match kind {
        StatusKind::Error => true,
        StatusKind::Warning | StatusKind::Success => mode.shows_status(),
        StatusKind::Info => mode.shows_info(),
        StatusKind::Skipped => mode.shows_notes(),
    }
}
