//! New-script generation

use crate::error::{EngineError, EngineResult};
use chrono::{DateTime, Utc};
use pw_core::{Phase, ScriptId};
use std::path::Path;

/// Starter content for a generated command script: an ordered JSON array
/// of database commands, applied one by one when the script runs.
const SCRIPT_TEMPLATE: &str = r#"[
  { "ping": 1 }
]
"#;

/// Create a new migration script in `phase_dir` and return its filename.
///
/// The filename is `<14-digit UTC timestamp>-<description>.json` with
/// whitespace in the description replaced by underscores. Fails with
/// `MissingParameter` before any file I/O when the description is empty,
/// and with `DirectoryUnavailable` when the phase directory has not been
/// created.
pub fn create_script(
    phase_dir: &Path,
    phase: Phase,
    description: &str,
    now: DateTime<Utc>,
) -> EngineResult<String> {
    if description.trim().is_empty() {
        return Err(EngineError::MissingParameter {
            name: "description".to_string(),
        });
    }

    if !phase_dir.is_dir() {
        return Err(EngineError::DirectoryUnavailable {
            phase,
            path: phase_dir.display().to_string(),
        });
    }

    let id = ScriptId::new(now, description);
    let file_name = format!("{}.json", id);
    let path = phase_dir.join(&file_name);
    std::fs::write(&path, SCRIPT_TEMPLATE).map_err(pw_core::CoreError::from)?;

    log::info!("created {}", path.display());
    Ok(file_name)
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
