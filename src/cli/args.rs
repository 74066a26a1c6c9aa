//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// moddoctor - Diagnose the modules enabled in an editor distribution.
#[derive(Debug, Parser)]
#[command(name = "moddoctor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Distribution root (defaults to ~/.distro.d)
    #[arg(short, long, global = true, env = "MODDOCTOR_DIR")]
    pub dir: Option<PathBuf>,

    /// Show verbose output, including skipped and satisfied packages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check every enabled module (default if no command specified)
    Doctor(DoctorArgs),

    /// List the enabled modules
    Modules(ModulesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Report format for the `doctor` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Streaming, colored report
    #[default]
    Human,
    /// A single JSON document on stdout
    Json,
}

/// Arguments for the `doctor` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DoctorArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,

    /// Exit with status 1 when any error was reported
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `modules` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ModulesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_none() {
        let cli = Cli::parse_from(["moddoctor"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn doctor_flags_parse() {
        let cli = Cli::parse_from(["moddoctor", "doctor", "--format", "json", "--strict"]);
        match cli.command {
            Some(Commands::Doctor(args)) => {
                assert_eq!(args.format, ReportFormat::Json);
                assert!(args.strict);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["moddoctor", "modules", "--dir", "/tmp/d", "-q"]);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/d")));
        assert!(cli.quiet);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["moddoctor", "doctor", "--format", "sarif"]).is_err());
    }
}
