//! Diagnostic reporting.
//!
//! - [`event`] - Severity levels and diagnostic events
//! - [`summary`] - Warning/error counters and the final summary lines
//! - [`reporter`] - The streaming [`Reporter`] and the finished [`DoctorReport`]
//! - [`json`] - Machine-readable output

pub mod event;
pub mod json;
pub mod reporter;
pub mod summary;

pub use event::{DiagnosticEvent, Severity};
pub use json::{JsonFormatter, REPORT_SCHEMA_VERSION};
pub use reporter::{DoctorReport, Reporter};
pub use summary::{RunSummary, SUCCESS_MESSAGE};
