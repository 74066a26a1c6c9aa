//! Modules command implementation.
//!
//! The `moddoctor modules` command lists the enabled modules with their
//! flags and catalog metadata.

use std::path::{Path, PathBuf};

use crate::cli::args::ModulesArgs;
use crate::config::load_selection;
use crate::error::{DoctorError, Result};
use crate::modules::{ModuleDescriptor, ModuleRegistry};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_CONFIG_ERROR};

/// The modules command implementation.
pub struct ModulesCommand {
    root: PathBuf,
    args: ModulesArgs,
}

impl ModulesCommand {
    /// Create a new modules command.
    pub fn new(root: &Path, args: ModulesArgs) -> Self {
        Self {
            root: root.to_path_buf(),
            args,
        }
    }

    fn load(&self) -> Result<ModuleRegistry> {
        let selection = load_selection(&self.root)?;
        ModuleRegistry::load(&self.root, &selection)
    }
}

/// One catalog line: `:lang rust +lsp  Rust support`.
fn describe(module: &ModuleDescriptor) -> String {
    let mut line = module.key.to_string();
    for flag in &module.flags {
        line.push(' ');
        line.push_str(flag);
    }
    if let Some(description) = &module.meta.description {
        line.push_str("  ");
        line.push_str(description);
    }
    line
}

impl Command for ModulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = match self.load() {
            Ok(registry) => registry,
            Err(e) if e.is_configuration() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            let modules: Vec<&ModuleDescriptor> = registry.iter().collect();
            let json = serde_json::to_string_pretty(&modules)
                .map_err(|e| DoctorError::Other(e.into()))?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        if registry.is_empty() {
            ui.message("No modules enabled.");
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Enabled modules ({})", registry.len()));
        for module in registry.iter() {
            ui.message_indented(&describe(module), 1);
        }
        Ok(CommandResult::success())
    }
}
