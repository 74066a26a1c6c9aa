//! Doctor command implementation.
//!
//! The `moddoctor doctor` command loads the module selection, resolves every
//! enabled module's packages, runs the self-checks and reports the result.

use std::path::{Path, PathBuf};

use crate::cli::args::{DoctorArgs, ReportFormat};
use crate::config::{load_selection, ConfigPaths, Selection};
use crate::error::Result;
use crate::modules::ModuleRegistry;
use crate::report::{DoctorReport, JsonFormatter, Reporter};
use crate::requirements::{
    DirectoryIndex, Environment, Resolver, Verbosity, YamlRequirementSource, YamlSelfCheck,
};
use crate::ui::{NullUI, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult, EXIT_CONFIG_ERROR};

/// Heading printed before the module pass.
pub const CHECKING_HEADING: &str = "Checking your enabled modules...";

/// The doctor command implementation.
pub struct DoctorCommand {
    root: PathBuf,
    args: DoctorArgs,
}

impl DoctorCommand {
    /// Create a new doctor command.
    pub fn new(root: &Path, args: DoctorArgs) -> Self {
        Self {
            root: root.to_path_buf(),
            args,
        }
    }

    /// Get the distribution root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &DoctorArgs {
        &self.args
    }

    /// Resolve every module and render the report through `ui`.
    pub fn run(
        &self,
        selection: &Selection,
        registry: &ModuleRegistry,
        ui: &mut dyn UserInterface,
    ) -> DoctorReport {
        let env = Environment::capture();
        let index = DirectoryIndex::new(&self.root, &selection.settings);
        let source = YamlRequirementSource::new();
        let self_check = YamlSelfCheck::new();
        let resolver = Resolver::new(&source, &index, &env)
            .with_self_check(&self_check)
            .with_verbosity(Verbosity::from(ui.output_mode()));

        tracing::debug!(
            "Checking {} modules, packages in {}",
            registry.len(),
            index.packages_dir().display()
        );

        let mut reporter = Reporter::new(ui);
        reporter.heading(CHECKING_HEADING);
        let resolution = reporter.section(|r| resolver.run(registry, r));
        reporter.finish(resolution)
    }
}

/// Load the selection and the registry; both failures are fatal.
fn load_distribution(root: &Path) -> Result<(Selection, ModuleRegistry)> {
    let selection = load_selection(root)?;
    let registry = ModuleRegistry::load(root, &selection)?;
    Ok((selection, registry))
}

impl Command for DoctorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let paths = ConfigPaths::discover(&self.root);
        if !paths.has_selection() {
            ui.error(&format!(
                "No module selection found at {}",
                paths.expected_selection().display()
            ));
            return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
        }

        let (selection, registry) = match load_distribution(&self.root) {
            Ok(loaded) => loaded,
            Err(e) if e.is_configuration() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
            }
            Err(e) => return Err(e),
        };

        // Apply the selection's default_output when no CLI flag was set
        if ui.output_mode() == OutputMode::Normal {
            if let Some(mode) = selection.settings.default_output {
                ui.set_output_mode(mode.into());
            }
        }

        let report = match self.args.format {
            ReportFormat::Human => self.run(&selection, &registry, ui),
            ReportFormat::Json => {
                let mut null = NullUI::new(ui.output_mode());
                let report = self.run(&selection, &registry, &mut null);
                JsonFormatter::pretty().format(&report, &mut std::io::stdout().lock())?;
                report
            }
        };

        if self.args.strict && report.summary.errors > 0 {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}
