//! Error types for pw-db

use thiserror::Error;

/// Document-store operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Command execution error (D002)
    #[error("[D002] Database command failed: {0}")]
    CommandError(String),

    /// Ledger storage unreachable (D003)
    #[error("[D003] Ledger storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Connection config missing url (D004)
    #[error("[D004] No `url` defined in mongodb config")]
    MissingUrl,

    /// Connection config missing database name (D005)
    #[error("[D005] No `database_name` defined in mongodb config")]
    MissingDatabaseName,
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<mongodb::error::Error> for DbError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;
        // Server-selection and transport failures mean the deployment is
        // unreachable; everything else is a failed command.
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::Authentication { .. }
            | ErrorKind::DnsResolve { .. } => DbError::ConnectionError(err.to_string()),
            _ => DbError::CommandError(err.to_string()),
        }
    }
}
