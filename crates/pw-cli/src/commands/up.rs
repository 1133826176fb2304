//! Up command implementation - applies pending migrations for a phase

use anyhow::{Context, Result};
use pw_core::{Config, Phase};
use pw_db::{MongoBackend, MongoLedger};
use pw_engine::{DirectorySource, MigrationRunner};
use std::path::Path;

use crate::cli::{GlobalArgs, UpArgs};

/// Execute the up command
pub(crate) async fn execute(args: &UpArgs, global: &GlobalArgs) -> Result<()> {
    let project_dir = Path::new(&global.project_dir);
    let config = Config::load(project_dir).context("Failed to load project config")?;
    let phase: Phase = args.phase.into();

    let backend = MongoBackend::connect(&config.mongodb).await?;
    let ledger = MongoLedger::new(&backend, &config.ledger_collection);
    ledger.ensure_index().await?;

    let source = DirectorySource::from_config(project_dir, &config);
    let runner = MigrationRunner::new(&backend, &ledger, &source)
        .with_script_timeout(config.script_timeout());

    if global.verbose {
        eprintln!(
            "[verbose] running {} phase from {}",
            phase,
            config.phase_dir(project_dir, phase).display()
        );
    }

    let result = runner.run(phase).await?;

    for id in &result.applied {
        println!("  ✓ {}", id);
    }

    match &result.failure {
        Some(failure) => {
            println!("  ✗ {}", failure.id);
            anyhow::bail!(
                "{} phase halted at {} after {} applied: {}",
                phase,
                failure.id,
                result.applied.len(),
                failure.cause
            );
        }
        None => {
            println!(
                "\n{} phase up to date ({} applied this run)",
                phase,
                result.applied.len()
            );
            Ok(())
        }
    }
}
