//! Init command implementation - scaffolds a new Phasewise project

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::InitArgs;

/// Execute the init command
pub(crate) async fn execute(args: &InitArgs) -> Result<()> {
    scaffold(Path::new("."), &args.name)
}

/// Create the project directory layout and config file under `base`.
fn scaffold(base: &Path, name: &str) -> Result<()> {
    // Reject names that could cause path traversal or confusing directory names
    if name.contains('/')
        || name.contains('\\')
        || name.contains("..")
        || name.starts_with('.')
        || name.starts_with('-')
    {
        anyhow::bail!(
            "Invalid project name '{}': must not contain '/', '\\', '..', or start with '.' or '-'",
            name
        );
    }

    let project_dir = base.join(name);

    if project_dir.exists() {
        anyhow::bail!(
            "Directory '{}' already exists. Choose a different project name.",
            name
        );
    }

    println!("Creating new Phasewise project: {}\n", name);

    for dir in ["", "before", "after"] {
        let path = project_dir.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }

    // Generate phasewise.yml; escape YAML special characters in interpolated values
    let safe_name = name.replace('"', "\\\"");
    let config_content = format!(
        r#"name: "{name}"

# before_path: before
# after_path: after
# ledger_collection: migrations
# script_timeout_secs: 300

mongodb:
  url: mongodb://localhost:27017
  database_name: "{name}"
  options:
    connect_timeout_secs: 10
    server_selection_timeout_secs: 10
"#,
        name = safe_name,
    );
    fs::write(project_dir.join("phasewise.yml"), config_content)
        .context("Failed to write phasewise.yml")?;

    println!("Created:");
    println!("  {}/phasewise.yml", name);
    println!("  {}/before/", name);
    println!("  {}/after/", name);
    println!("\nNext steps:");
    println!("  1. Point mongodb.url and mongodb.database_name at your database");
    println!("  2. pw create before <description>");
    println!("  3. pw up before");

    Ok(())
}
