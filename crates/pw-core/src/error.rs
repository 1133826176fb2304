//! Error types for pw-core

use thiserror::Error;

/// Core error type for Phasewise
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// E004: A migration-script directory cannot be listed
    #[error("[E004] Migration directory unavailable: {path}: {source}")]
    DirectoryUnavailable {
        path: String,
        source: std::io::Error,
    },

    /// E005: A script filename does not follow the id convention
    #[error("[E005] Invalid script name '{name}': expected <14-digit timestamp>-<description>.<ext>")]
    InvalidScriptName { name: String },

    /// E006: IO error
    #[error("[E006] IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
