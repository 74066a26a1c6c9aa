//! Non-interactive UI for CI/headless environments.

use super::{indentation, status_visible, OutputMode, StatusKind, UserInterface};

/// UI implementation for pipes, CI logs and `--no-color` runs.
///
/// Status lines use bracketed tags instead of icons so they stay
/// greppable in log files. Report lines go to stdout in arrival order;
/// warnings and fatal errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message_indented(&mut self, msg: &str, indent: usize) {
        if self.mode.shows_status() {
            println!("{}{}", indentation(indent), msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_info() {
            println!("{}", title);
        }
    }

    fn show_status(&mut self, kind: StatusKind, msg: &str, indent: usize) {
        if status_visible(self.mode, kind) {
            println!("{}{}", indentation(indent), kind.format_plain(msg));
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
