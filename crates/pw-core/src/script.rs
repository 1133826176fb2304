//! Migration script identifiers and discovered script files

use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Width of the UTC timestamp prefix (`YYYYMMDDHHmmss`)
const TIMESTAMP_LEN: usize = 14;

/// Canonical, sortable identifier of a migration script.
///
/// The id is a 14-digit UTC timestamp followed by `-` and the script
/// description with whitespace replaced by underscores, e.g.
/// `20160609080700-add_customer_index`. Because the timestamp prefix is
/// fixed-width, lexicographic order on the full id equals chronological
/// creation order; the runner relies on this to execute scripts in order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptId(String);

impl ScriptId {
    /// Build an id from a creation time and a description.
    ///
    /// Whitespace in the description is replaced by underscores. The
    /// description must be non-empty; callers validate that before any
    /// id is built.
    pub fn new(timestamp: DateTime<Utc>, description: &str) -> Self {
        let normalized = description.trim().replace(char::is_whitespace, "_");
        ScriptId(format!("{}-{}", timestamp.format("%Y%m%d%H%M%S"), normalized))
    }

    /// Parse an id from a script file name, splitting off the extension.
    ///
    /// Returns `None` when the name does not follow the
    /// `<14-digit timestamp>-<description>.<ext>` convention; such files
    /// are ignored by discovery rather than treated as errors.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (stem, ext) = file_name.rsplit_once('.')?;
        if ext.is_empty() {
            return None;
        }
        Self::parse(stem)
    }

    fn parse(s: &str) -> Option<Self> {
        if s.len() < TIMESTAMP_LEN + 2 {
            return None;
        }
        let (ts, rest) = s.split_at(TIMESTAMP_LEN);
        if !ts.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let description = rest.strip_prefix('-')?;
        if description.is_empty() {
            return None;
        }
        Some(ScriptId(s.to_string()))
    }

    /// The 14-digit timestamp prefix
    pub fn timestamp(&self) -> &str {
        &self.0[..TIMESTAMP_LEN]
    }

    /// The description part of the id (after the timestamp)
    pub fn description(&self) -> &str {
        &self.0[TIMESTAMP_LEN + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ScriptId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ScriptId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::InvalidScriptName {
            name: s.to_string(),
        })
    }
}

/// A migration script discovered on disk.
///
/// Transient: rebuilt from the phase directory on every run, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFile {
    /// Sortable id parsed from the file name (extension excluded)
    pub id: ScriptId,
    /// Absolute or project-relative path to the script file
    pub path: PathBuf,
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
