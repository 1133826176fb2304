//! pw-engine - Migration engine for Phasewise
//!
//! This crate provides the `Migration` trait, script loading and source
//! abstractions, the sequential `MigrationRunner`, and the script
//! generator.

pub mod error;
pub mod generator;
pub mod migration;
pub mod runner;
pub mod source;

pub use error::{EngineError, EngineResult};
pub use generator::create_script;
pub use migration::{CodeMigration, CommandFileLoader, CommandScript, Migration, ScriptLoader};
pub use runner::{FailureCause, MigrationRunner, RunFailure, RunResult, ScriptStatus};
pub use source::{CodeSource, DirectorySource, MigrationSource};
