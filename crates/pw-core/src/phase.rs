//! Migration phase selector

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two independent migration tracks.
///
/// Each phase has its own script directory and its own scope in the
/// applied-state ledger. The `Before` phase is intended to run ahead of an
/// external action (e.g. an application deploy) and the `After` phase
/// behind it; the engine itself orders nothing across phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Scripts applied before the external action
    Before,
    /// Scripts applied after the external action
    After,
}

impl Phase {
    /// Ledger scope string, also the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Before => "before",
            Phase::After => "after",
        }
    }

    /// Both phases, in conventional order
    pub fn all() -> [Phase; 2] {
        [Phase::Before, Phase::After]
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
