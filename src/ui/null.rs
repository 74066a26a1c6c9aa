//! UI that renders nothing to stdout.
//!
//! Used when stdout carries a machine-readable document. Fatal errors still
//! reach stderr.

use super::{OutputMode, StatusKind, UserInterface};

/// Discards report output.
#[derive(Debug, Default)]
pub struct NullUI {
    mode: OutputMode,
}

impl NullUI {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NullUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message_indented(&mut self, _msg: &str, _indent: usize) {}

    fn success(&mut self, _msg: &str) {}

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, _title: &str) {}

    fn show_status(&mut self, _kind: StatusKind, _msg: &str, _indent: usize) {}

    fn is_interactive(&self) -> bool {
        false
    }
}
