//! Error types for pw-engine

use pw_core::{CoreError, Phase, ScriptId};
use pw_db::DbError;
use thiserror::Error;

/// Migration engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// M001: A required argument was omitted
    #[error("[M001] Missing parameter: {name}")]
    MissingParameter { name: String },

    /// M002: A phase directory does not exist or cannot be used
    #[error("[M002] {phase} directory does not exist: {path}")]
    DirectoryUnavailable { phase: Phase, path: String },

    /// M003: Two scripts resolve to the same id within one phase
    #[error("[M003] Duplicate script id '{id}' in {phase} phase")]
    DuplicateScriptId { id: ScriptId, phase: Phase },

    /// M004: A script file could not be loaded
    #[error("[M004] Failed to load script {path}: {message}")]
    ScriptLoad { path: String, message: String },

    /// Error from script discovery or file IO
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Error from the document store or the ledger
    #[error(transparent)]
    Db(#[from] DbError),
}

/// Result type alias for EngineError
pub type EngineResult<T> = Result<T, EngineError>;
