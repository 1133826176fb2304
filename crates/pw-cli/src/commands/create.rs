//! Create command implementation - generates a new migration script

use anyhow::{Context, Result};
use chrono::Utc;
use pw_core::{Config, Phase};
use pw_engine::create_script;
use std::path::Path;

use crate::cli::{CreateArgs, GlobalArgs};

/// Execute the create command
pub(crate) async fn execute(args: &CreateArgs, global: &GlobalArgs) -> Result<()> {
    let project_dir = Path::new(&global.project_dir);
    let config = Config::load(project_dir).context("Failed to load project config")?;

    let phase: Phase = args.phase.into();
    let description = args.description.join(" ");
    let phase_dir = config.phase_dir(project_dir, phase);

    if global.verbose {
        eprintln!("[verbose] creating script in {}", phase_dir.display());
    }

    let file_name = create_script(&phase_dir, phase, &description, Utc::now())?;
    println!("Created {}", phase_dir.join(file_name).display());
    Ok(())
}
