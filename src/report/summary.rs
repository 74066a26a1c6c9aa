//! Run summary counters and their rendering.

use super::event::Severity;
use serde::Serialize;

/// Final line printed when a run found nothing to report.
pub const SUCCESS_MESSAGE: &str = "Everything seems fine, happy editing!";

/// Warning and error counts accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Number of warning events
    pub warnings: usize,
    /// Number of error events
    pub errors: usize,
}

impl RunSummary {
    /// Count one event of the given severity. Info events are not counted.
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Info => {}
            Severity::Warning => self.warnings += 1,
            Severity::Error => self.errors += 1,
        }
    }

    /// Whether the run produced no warnings and no errors.
    pub fn is_clean(&self) -> bool {
        self.warnings == 0 && self.errors == 0
    }

    /// Summary lines for a run with findings, warnings first.
    ///
    /// Empty for a clean run; callers print [`SUCCESS_MESSAGE`] instead.
    pub fn lines(&self) -> Vec<(Severity, String)> {
        let mut lines = Vec::new();
        if self.warnings > 0 {
            lines.push((Severity::Warning, count_line(self.warnings, "warning")));
        }
        if self.errors > 0 {
            lines.push((Severity::Error, count_line(self.errors, "error")));
        }
        lines
    }
}

fn count_line(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("There is 1 {}!", noun)
    } else {
        format!("There are {} {}s!", count, noun)
    }
}
