//! Migration script discovery
//!
//! Reads a phase directory and returns the scripts it contains, sorted
//! ascending by id. Pure read; nothing is cached across invocations.

use crate::error::{CoreError, CoreResult};
use crate::script::{ScriptFile, ScriptId};
use std::path::Path;

/// List the migration scripts in `dir`, sorted ascending by id.
///
/// Files whose names do not follow the
/// `<14-digit timestamp>-<description>.<ext>` convention are ignored, as
/// are subdirectories. An empty directory yields an empty list; a
/// directory that cannot be read yields `DirectoryUnavailable`.
pub fn list_scripts(dir: &Path) -> CoreResult<Vec<ScriptFile>> {
    let entries = std::fs::read_dir(dir).map_err(|e| CoreError::DirectoryUnavailable {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut scripts = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CoreError::DirectoryUnavailable {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match ScriptId::from_file_name(file_name) {
            Some(id) => scripts.push(ScriptFile { id, path }),
            None => {
                log::debug!("ignoring non-script file: {}", path.display());
            }
        }
    }

    scripts.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(scripts)
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
