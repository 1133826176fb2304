//! Applied-state ledger records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One successfully applied script, as persisted in the ledger collection.
///
/// At most one record exists per `(phase, id)` pair; the collection
/// carries a unique index on those two fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRecord {
    /// Ledger scope, `"before"` or `"after"`
    pub phase: String,

    /// Script id that was applied
    pub id: String,

    /// When the script was marked applied
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub applied_at: DateTime<Utc>,
}
