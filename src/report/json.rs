//! JSON output formatter.
//!
//! Formats a finished [`DoctorReport`] as machine-readable JSON for tooling
//! integration.

use super::reporter::DoctorReport;
use serde::Serialize;
use std::io::Write;

/// Version of the JSON document layout.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Formats reports as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    schema_version: u32,
    tool: &'static str,
    version: &'static str,
    #[serde(flatten)]
    report: &'a DoctorReport,
}

impl JsonFormatter {
    /// Create a compact JSON formatter.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a pretty-printing JSON formatter.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Write the report to `writer`, followed by a newline.
    pub fn format<W: Write>(&self, report: &DoctorReport, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            schema_version: REPORT_SCHEMA_VERSION,
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            report,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::ModuleKey;
    use crate::report::{DiagnosticEvent, RunSummary};
    use crate::requirements::{Classification, RequirementStatus, SatisfiedBy};
    use chrono::Utc;

    fn sample_report() -> DoctorReport {
        let python = ModuleKey::new("lang", "python");
        DoctorReport {
            generated_at: Utc::now(),
            modules_checked: 1,
            summary: RunSummary {
                warnings: 0,
                errors: 1,
            },
            events: vec![DiagnosticEvent::error("Missing package: flake8")
                .with_module(python.clone())
                .with_package("flake8")],
            classifications: vec![
                Classification {
                    module: python.clone(),
                    package: "black".to_string(),
                    status: RequirementStatus::Satisfied {
                        by: SatisfiedBy::Installed,
                    },
                },
                Classification {
                    module: python,
                    package: "flake8".to_string(),
                    status: RequirementStatus::Missing,
                },
            ],
        }
    }

    #[test]
    fn formats_report_as_json() {
        let mut output = Vec::new();
        JsonFormatter::new()
            .format(&sample_report(), &mut output)
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(json["schema_version"], 1);
        assert_eq!(json["tool"], "moddoctor");
        assert_eq!(json["summary"]["errors"], 1);
        assert_eq!(json["events"][0]["module"]["category"], ":lang");
        assert_eq!(json["events"][0]["package"], "flake8");
        assert_eq!(json["classifications"][1]["status"]["kind"], "missing");
        assert_eq!(json["classifications"][0]["status"]["kind"], "satisfied");
        assert_eq!(json["classifications"][0]["status"]["by"], "installed");
    }

    #[test]
    fn pretty_output_is_multiline() {
        let mut output = Vec::new();
        JsonFormatter::pretty()
            .format(&sample_report(), &mut output)
            .unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.lines().count() > 5);
    }
}
