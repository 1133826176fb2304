//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use pw_core::Phase;

/// Phasewise - a two-phase migration runner for MongoDB
#[derive(Parser, Debug)]
#[command(name = "pw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new Phasewise project
    Init(InitArgs),

    /// Create a new migration script for a phase
    Create(CreateArgs),

    /// Apply pending migrations for a phase
    Up(UpArgs),

    /// Show applied and pending scripts
    Status(StatusArgs),
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the project directory to create
    pub name: String,
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Phase the new script belongs to
    #[arg(value_enum)]
    pub phase: PhaseArg,

    /// Script description (spaces become underscores in the filename)
    #[arg(trailing_var_arg = true)]
    pub description: Vec<String>,
}

/// Arguments for the up command
#[derive(Args, Debug)]
pub struct UpArgs {
    /// Phase to run
    #[arg(value_enum)]
    pub phase: PhaseArg,
}

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Limit to one phase (default: both)
    #[arg(value_enum)]
    pub phase: Option<PhaseArg>,
}

/// Phase selector as a CLI value
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseArg {
    /// Scripts applied before the external action
    Before,
    /// Scripts applied after the external action
    After,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Before => Phase::Before,
            PhaseArg::After => Phase::After,
        }
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
