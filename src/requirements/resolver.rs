//! Package requirement resolution.
//!
//! The [`Resolver`] walks the registry in order. For each module it builds
//! a fresh [`PackageScope`], lets the [`RequirementSource`] declare into it,
//! classifies every requirement, and then runs the module's [`SelfCheck`].
//! Per-module failures become error events; they never stop the run.

use super::index::PackageIndex;
use super::package::{PackageRequirement, PackageScope};
use super::predicate::PredicateContext;
use super::probe::Environment;
use super::self_check::SelfCheck;
use super::source::{RequirementSource, SourceOutcome, Verbosity};
use super::status::{Classification, RequirementStatus, SatisfiedBy};
use crate::modules::{ModuleDescriptor, ModuleRegistry};
use crate::report::{DiagnosticEvent, Reporter};
use crate::ui::StatusKind;
use serde::Serialize;

/// What a resolution pass produced, besides the events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    /// Every classification, in registry then declaration order
    pub classifications: Vec<Classification>,
    /// Modules visited
    pub modules_checked: usize,
}

impl ResolutionReport {
    /// Classifications with status `Missing`.
    pub fn missing(&self) -> impl Iterator<Item = &Classification> {
        self.classifications.iter().filter(|c| c.status.is_missing())
    }
}

/// Resolves and classifies package requirements for every enabled module.
pub struct Resolver<'a> {
    source: &'a dyn RequirementSource,
    self_check: Option<&'a dyn SelfCheck>,
    index: &'a dyn PackageIndex,
    env: &'a Environment,
    verbosity: Verbosity,
}

impl<'a> Resolver<'a> {
    /// Create a resolver without a self-check.
    pub fn new(
        source: &'a dyn RequirementSource,
        index: &'a dyn PackageIndex,
        env: &'a Environment,
    ) -> Self {
        Self {
            source,
            self_check: None,
            index,
            env,
            verbosity: Verbosity::default(),
        }
    }

    /// Builder: run this self-check after each module's requirements.
    pub fn with_self_check(mut self, self_check: &'a dyn SelfCheck) -> Self {
        self.self_check = Some(self_check);
        self
    }

    /// Builder: set the verbosity passed to collaborators.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Classify one requirement. First match wins.
    pub fn classify(
        &self,
        requirement: &PackageRequirement,
        ctx: &PredicateContext<'_>,
    ) -> RequirementStatus {
        if requirement.is_disabled(ctx) {
            return RequirementStatus::SkippedDisabled;
        }
        if requirement.is_ignored(ctx) {
            return RequirementStatus::SkippedIgnored;
        }
        if requirement.built_in || self.index.is_builtin(&requirement.name) {
            return RequirementStatus::Satisfied {
                by: SatisfiedBy::BuiltIn,
            };
        }
        let local_repo = requirement
            .recipe
            .as_ref()
            .and_then(|r| r.local_repo.as_ref());
        if let Some(local) = local_repo {
            if ctx.module.path.join(local).is_dir() {
                return RequirementStatus::Satisfied {
                    by: SatisfiedBy::LocalRepo,
                };
            }
        }
        if self.index.is_installed(&requirement.name) {
            return RequirementStatus::Satisfied {
                by: SatisfiedBy::Installed,
            };
        }
        RequirementStatus::Missing
    }

    /// Resolve a single module, reporting its findings.
    pub fn resolve_module(
        &self,
        module: &ModuleDescriptor,
        registry: &ModuleRegistry,
        reporter: &mut Reporter<'_>,
    ) -> Vec<Classification> {
        let ctx = PredicateContext {
            module,
            registry,
            env: self.env,
        };
        reporter.begin_module(&module.key);

        let mut scope = PackageScope::new();
        let requirements = match self.source.declare(module, &mut scope, self.verbosity) {
            Ok(SourceOutcome::Declared) => scope.into_requirements(),
            Ok(SourceOutcome::Absent) => {
                tracing::debug!("{} declares no packages", module.key);
                Vec::new()
            }
            Err(e) => {
                tracing::debug!("Requirement source failed for {}: {}", module.key, e);
                reporter.emit(
                    DiagnosticEvent::error(e.to_string()).with_module(module.key.clone()),
                );
                Vec::new()
            }
        };

        let mut classifications = Vec::with_capacity(requirements.len());
        for requirement in &requirements {
            let status = self.classify(requirement, &ctx);
            self.report_status(reporter, module, &requirement.name, status);
            classifications.push(Classification {
                module: module.key.clone(),
                package: requirement.name.clone(),
                status,
            });
        }

        if let Some(self_check) = self.self_check {
            match self_check.run(module, &ctx, self.verbosity) {
                Ok(None) => {}
                Ok(Some(findings)) => {
                    for finding in findings {
                        reporter.emit(
                            DiagnosticEvent::new(finding.severity, finding.message)
                                .with_module(module.key.clone()),
                        );
                    }
                }
                Err(e) => {
                    reporter.emit(
                        DiagnosticEvent::error(e.to_string()).with_module(module.key.clone()),
                    );
                }
            }
        }

        reporter.end_module();
        classifications
    }

    /// Resolve every module in registry order.
    pub fn run(&self, registry: &ModuleRegistry, reporter: &mut Reporter<'_>) -> ResolutionReport {
        let mut report = ResolutionReport::default();
        for module in registry.iter() {
            let classifications = self.resolve_module(module, registry, reporter);
            report.classifications.extend(classifications);
            report.modules_checked += 1;
        }
        tracing::debug!(
            "Resolved {} requirement(s) across {} module(s)",
            report.classifications.len(),
            report.modules_checked
        );
        report
    }

    fn report_status(
        &self,
        reporter: &mut Reporter<'_>,
        module: &ModuleDescriptor,
        package: &str,
        status: RequirementStatus,
    ) {
        match status {
            RequirementStatus::Missing => reporter.emit(
                DiagnosticEvent::error(format!("Missing package: {}", package))
                    .with_module(module.key.clone())
                    .with_package(package),
            ),
            RequirementStatus::SkippedDisabled | RequirementStatus::SkippedIgnored => {
                reporter.note(StatusKind::Skipped, &format!("{} ({})", package, status));
            }
            RequirementStatus::Satisfied { by } => {
                reporter.note(StatusKind::Success, &format!("{} ({})", package, by));
            }
        }
    }
}
