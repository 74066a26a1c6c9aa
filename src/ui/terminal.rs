//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    indentation, should_use_colors, status_visible, DoctorTheme, NonInteractiveUI, OutputMode,
    StatusKind, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: DoctorTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DoctorTheme::new()
        } else {
            DoctorTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message_indented(&mut self, msg: &str, indent: usize) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}{}", indentation(indent), msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_info() {
            writeln!(self.term, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn show_module(&mut self, tag: &str, indent: usize) {
        if self.mode.shows_status() {
            writeln!(
                self.term,
                "{}{}",
                indentation(indent),
                self.theme.format_module(tag)
            )
            .ok();
        }
    }

    fn show_status(&mut self, kind: StatusKind, msg: &str, indent: usize) {
        if status_visible(self.mode, kind) {
            writeln!(
                self.term,
                "{}{}",
                indentation(indent),
                kind.format(&self.theme, msg)
            )
            .ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
