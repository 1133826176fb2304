//! Document-store and ledger trait definitions

use crate::error::DbResult;
use crate::record::AppliedRecord;
use async_trait::async_trait;
use mongodb::bson::Document;
use pw_core::{Phase, ScriptId};
use std::collections::HashSet;

/// The capability handed to change scripts.
///
/// Scripts see the target database only through this trait; the runner
/// never hands out a raw driver handle. Implementations must be
/// Send + Sync for async operation.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Run a single database command, returning the server's reply
    async fn run_command(&self, command: Document) -> DbResult<Document>;

    /// Store type identifier for logging
    fn store_type(&self) -> &'static str;
}

/// Durable record of which script ids have been applied, scoped per phase.
///
/// The ledger exclusively owns its persistent representation; callers
/// only see id sets and records.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// All ids previously marked applied for `phase`
    async fn applied_ids(&self, phase: Phase) -> DbResult<HashSet<String>>;

    /// Applied records for `phase` with their timestamps, for status display
    async fn applied_records(&self, phase: Phase) -> DbResult<Vec<AppliedRecord>>;

    /// Durably record that `id` has been applied for `phase`.
    ///
    /// Idempotent: a second call with the same arguments is a no-op,
    /// never a duplicate-key failure.
    async fn mark_applied(&self, phase: Phase, id: &ScriptId) -> DbResult<()>;
}
