//! Streaming diagnostic reporter.
//!
//! The [`Reporter`] is the single owner of a run's mutable state: the
//! warning/error counters, the append-only event log, the current
//! indentation level and the module whose header has not been printed yet.
//! Every event is rendered as soon as it arrives.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::event::{DiagnosticEvent, Severity};
use super::summary::{RunSummary, SUCCESS_MESSAGE};
use crate::modules::ModuleKey;
use crate::requirements::{Classification, ResolutionReport};
use crate::ui::{OutputMode, StatusKind, UserInterface};

/// Everything one doctor run produced.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    /// When the run finished
    pub generated_at: DateTime<Utc>,
    /// Number of modules the resolver visited
    pub modules_checked: usize,
    /// Final counters
    pub summary: RunSummary,
    /// Events in arrival order
    pub events: Vec<DiagnosticEvent>,
    /// Every requirement's classification, in resolution order
    pub classifications: Vec<Classification>,
}

impl DoctorReport {
    /// Error events only.
    pub fn errors(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter().filter(|e| e.severity == Severity::Error)
    }
}

/// Accumulates events and renders them through a [`UserInterface`].
pub struct Reporter<'ui> {
    ui: &'ui mut dyn UserInterface,
    summary: RunSummary,
    events: Vec<DiagnosticEvent>,
    indent: usize,
    module: Option<ModuleKey>,
    header_pending: bool,
}

impl<'ui> Reporter<'ui> {
    /// Create a reporter writing to `ui`.
    pub fn new(ui: &'ui mut dyn UserInterface) -> Self {
        Self {
            ui,
            summary: RunSummary::default(),
            events: Vec::new(),
            indent: 0,
            module: None,
            header_pending: false,
        }
    }

    /// Clear counters, events and scope state for a new run.
    pub fn reset(&mut self) {
        self.summary = RunSummary::default();
        self.events.clear();
        self.indent = 0;
        self.module = None;
        self.header_pending = false;
    }

    /// The output mode of the underlying UI.
    pub fn output_mode(&self) -> OutputMode {
        self.ui.output_mode()
    }

    /// Current indentation level.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Print a progress heading (not an event).
    pub fn heading(&mut self, title: &str) {
        if self.indent == 0 {
            self.ui.show_header(title);
        } else {
            self.ui.message_indented(title, self.indent);
        }
    }

    /// Run `f` one indentation level deeper; the level is restored afterwards.
    pub fn section<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        self.indent += 1;
        let out = f(self);
        self.indent -= 1;
        out
    }

    /// Enter a module's scope. Its header is printed lazily, right before
    /// the first line that belongs to it, so clean modules print nothing.
    pub fn begin_module(&mut self, key: &ModuleKey) {
        self.module = Some(key.clone());
        self.header_pending = true;
    }

    /// Leave the current module's scope.
    pub fn end_module(&mut self) {
        self.module = None;
        self.header_pending = false;
    }

    /// Record and render one event.
    ///
    /// Events without a module tag inherit the module currently in scope.
    pub fn emit(&mut self, mut event: DiagnosticEvent) {
        if event.module.is_none() {
            event.module = self.module.clone();
        }
        self.summary.record(event.severity);

        let indent = self.line_indent(event.module.as_ref());
        self.ui
            .show_status(StatusKind::from(event.severity), &event.message, indent);
        self.events.push(event);
    }

    /// Render a verbose-only note. Notes are not events and are not counted.
    pub fn note(&mut self, kind: StatusKind, message: &str) {
        if !self.ui.output_mode().shows_notes() {
            return;
        }
        let module = self.module.clone();
        let indent = self.line_indent(module.as_ref());
        self.ui.show_status(kind, message, indent);
    }

    /// Counters so far.
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Events so far, in arrival order.
    pub fn events(&self) -> &[DiagnosticEvent] {
        &self.events
    }

    /// Render the summary and hand back the run's results.
    pub fn finish(mut self, resolution: ResolutionReport) -> DoctorReport {
        self.end_module();
        let lines = self.summary.lines();
        if lines.is_empty() {
            self.ui.success(SUCCESS_MESSAGE);
        } else {
            for (severity, line) in lines {
                self.ui.show_status(StatusKind::from(severity), &line, 0);
            }
        }

        DoctorReport {
            generated_at: Utc::now(),
            modules_checked: resolution.modules_checked,
            summary: self.summary,
            events: self.events,
            classifications: resolution.classifications,
        }
    }

    /// Indentation for a line, flushing the module header when needed.
    fn line_indent(&mut self, module: Option<&ModuleKey>) -> usize {
        let in_scope = module.is_some() && module == self.module.as_ref();
        if !in_scope {
            return self.indent;
        }
        if self.header_pending {
            self.header_pending = false;
            if let Some(key) = &self.module {
                let header = key.tagged();
                self.ui.show_module(&header, self.indent);
            }
        }
        self.indent + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn python() -> ModuleKey {
        ModuleKey::new("lang", "python")
    }

    #[test]
    fn counts_events_by_severity() {
        let mut ui = MockUI::new();
        let mut reporter = Reporter::new(&mut ui);
        reporter.emit(DiagnosticEvent::warning("w1"));
        reporter.emit(DiagnosticEvent::warning("w2"));
        reporter.emit(DiagnosticEvent::error("e1"));
        reporter.emit(DiagnosticEvent::info("i1"));
        assert_eq!(
            reporter.summary(),
            RunSummary {
                warnings: 2,
                errors: 1
            }
        );
        assert_eq!(reporter.events().len(), 4);
    }

    #[test]
    fn events_render_immediately() {
        let mut ui = MockUI::new();
        {
            let mut reporter = Reporter::new(&mut ui);
            reporter.emit(DiagnosticEvent::error("first"));
        }
        assert!(ui.has_status(StatusKind::Error, "first"));
    }

    #[test]
    fn clean_run_prints_success() {
        let mut ui = MockUI::new();
        let report = Reporter::new(&mut ui).finish(ResolutionReport::default());
        assert!(report.summary.is_clean());
        assert_eq!(ui.successes(), &[SUCCESS_MESSAGE.to_string()]);
        assert!(ui.statuses().is_empty());
    }

    #[test]
    fn summary_lines_are_pluralized() {
        let mut ui = MockUI::new();
        let mut reporter = Reporter::new(&mut ui);
        reporter.emit(DiagnosticEvent::error("a"));
        reporter.emit(DiagnosticEvent::error("b"));
        reporter.emit(DiagnosticEvent::error("c"));
        reporter.emit(DiagnosticEvent::warning("d"));
        reporter.finish(ResolutionReport::default());
        assert!(ui.has_status(StatusKind::Warning, "There is 1 warning!"));
        assert!(ui.has_status(StatusKind::Error, "There are 3 errors!"));
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn section_indents_and_restores() {
        let mut ui = MockUI::new();
        let mut reporter = Reporter::new(&mut ui);
        reporter.section(|r| {
            assert_eq!(r.indent(), 1);
            r.section(|r| r.emit(DiagnosticEvent::warning("deep")));
            r.emit(DiagnosticEvent::warning("shallow"));
        });
        assert_eq!(reporter.indent(), 0);
        drop(reporter);
        assert_eq!(ui.statuses()[0].2, 2);
        assert_eq!(ui.statuses()[1].2, 1);
    }

    #[test]
    fn module_header_is_lazy() {
        let mut ui = MockUI::new();
        let mut reporter = Reporter::new(&mut ui);

        reporter.begin_module(&ModuleKey::new("ui", "modeline"));
        reporter.end_module();

        reporter.begin_module(&python());
        reporter.emit(DiagnosticEvent::error("Missing package: flake8"));
        reporter.emit(DiagnosticEvent::error("Missing package: pyflakes"));
        reporter.end_module();
        drop(reporter);

        assert_eq!(ui.messages(), vec!["(:lang . python)".to_string()]);
        assert_eq!(ui.modules(), &["(:lang . python)".to_string()]);
        assert_eq!(
            ui.transcript(),
            &[
                "(:lang . python)".to_string(),
                "  [error] Missing package: flake8".to_string(),
                "  [error] Missing package: pyflakes".to_string(),
            ]
        );
    }

    #[test]
    fn events_inherit_module_in_scope() {
        let mut ui = MockUI::new();
        let mut reporter = Reporter::new(&mut ui);
        reporter.begin_module(&python());
        reporter.emit(DiagnosticEvent::warning("from self-check"));
        assert_eq!(reporter.events()[0].module, Some(python()));
    }

    #[test]
    fn notes_are_verbose_only_and_uncounted() {
        let mut ui = MockUI::with_mode(OutputMode::Normal);
        let mut reporter = Reporter::new(&mut ui);
        reporter.begin_module(&python());
        reporter.note(StatusKind::Skipped, "Skipped lsp-pyright (disabled)");
        assert!(reporter.events().is_empty());
        drop(reporter);
        assert!(ui.statuses().is_empty());
        assert!(ui.messages().is_empty());

        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        let mut reporter = Reporter::new(&mut ui);
        reporter.begin_module(&python());
        reporter.note(StatusKind::Skipped, "Skipped lsp-pyright (disabled)");
        assert!(reporter.summary().is_clean());
        drop(reporter);
        assert!(ui.has_status(StatusKind::Skipped, "lsp-pyright"));
        assert!(ui.has_message("(:lang . python)"));
    }

    #[test]
    fn reset_clears_state() {
        let mut ui = MockUI::new();
        let mut reporter = Reporter::new(&mut ui);
        reporter.emit(DiagnosticEvent::error("x"));
        reporter.reset();
        assert!(reporter.summary().is_clean());
        assert!(reporter.events().is_empty());
    }
}
