//! Status command implementation - shows applied and pending scripts

use anyhow::{Context, Result};
use pw_core::{Config, Phase};
use pw_db::{MongoBackend, MongoLedger};
use pw_engine::{DirectorySource, MigrationRunner};
use std::path::Path;

use crate::cli::{GlobalArgs, StatusArgs};

/// Execute the status command
pub(crate) async fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let project_dir = Path::new(&global.project_dir);
    let config = Config::load(project_dir).context("Failed to load project config")?;

    let backend = MongoBackend::connect(&config.mongodb).await?;
    let ledger = MongoLedger::new(&backend, &config.ledger_collection);
    let source = DirectorySource::from_config(project_dir, &config);
    let runner = MigrationRunner::new(&backend, &ledger, &source);

    let phases: Vec<Phase> = match args.phase {
        Some(p) => vec![p.into()],
        None => Phase::all().to_vec(),
    };

    for phase in phases {
        let statuses = runner.status(phase).await?;
        println!("{} phase:", phase);
        if statuses.is_empty() {
            println!("  (no scripts)");
        }
        for status in statuses {
            match status.applied_at {
                Some(at) => println!(
                    "  APPLIED {} {}",
                    at.format("%Y-%m-%d %H:%M:%S"),
                    status.id
                ),
                None => println!("  PENDING                     {}", status.id),
            }
        }
        println!();
    }

    Ok(())
}
