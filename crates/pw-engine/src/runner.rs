//! Sequential migration execution

use crate::error::{EngineError, EngineResult};
use crate::migration::Migration;
use crate::source::MigrationSource;
use chrono::{DateTime, Utc};
use pw_core::{Phase, ScriptId};
use pw_db::{DocumentStore, Ledger};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::time::Duration;

/// Why a run halted partway through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
    /// The script's change function reported failure
    Script(String),
    /// The script did not finish within the configured deadline
    Timeout(Duration),
    /// The ledger write after a successful script failed
    Ledger(String),
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCause::Script(msg) => write!(f, "script failed: {}", msg),
            FailureCause::Timeout(d) => write!(f, "script timed out after {:?}", d),
            FailureCause::Ledger(msg) => write!(f, "ledger write failed: {}", msg),
        }
    }
}

/// The script at which a run halted, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFailure {
    pub id: ScriptId,
    pub cause: FailureCause,
}

/// Outcome of one runner invocation against a single phase.
///
/// Constructed fresh per invocation and returned to the caller; never
/// persisted.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Phase the run targeted
    pub phase: Phase,
    /// Ids whose execution was started, in order
    pub attempted: Vec<ScriptId>,
    /// Ids executed and durably marked applied, in order
    pub applied: Vec<ScriptId>,
    /// Set when the run halted before completing the pending list
    pub failure: Option<RunFailure>,
}

impl RunResult {
    fn new(phase: Phase) -> Self {
        Self {
            phase,
            attempted: Vec::new(),
            applied: Vec::new(),
            failure: None,
        }
    }

    /// Whether every pending script was applied
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }
}

/// One script's position in the status view
#[derive(Debug, Clone)]
pub struct ScriptStatus {
    pub id: ScriptId,
    /// When the script was applied, or `None` while pending
    pub applied_at: Option<DateTime<Utc>>,
}

/// Executes pending migrations for a phase, strictly in id order.
///
/// Assumes a single runner process per database; concurrent invocations
/// against the same phase are not coordinated.
pub struct MigrationRunner<'a> {
    store: &'a dyn DocumentStore,
    ledger: &'a dyn Ledger,
    source: &'a dyn MigrationSource,
    script_timeout: Option<Duration>,
}

impl<'a> MigrationRunner<'a> {
    pub fn new(
        store: &'a dyn DocumentStore,
        ledger: &'a dyn Ledger,
        source: &'a dyn MigrationSource,
    ) -> Self {
        Self {
            store,
            ledger,
            source,
            script_timeout: None,
        }
    }

    /// Abort any single script that runs longer than `deadline`.
    ///
    /// An aborted script is never marked applied.
    pub fn with_script_timeout(mut self, deadline: Option<Duration>) -> Self {
        self.script_timeout = deadline;
        self
    }

    /// Apply every pending script for `phase`.
    ///
    /// Scripts execute sequentially in ascending id order, each followed
    /// by a ledger write. The script effect and the ledger write are not
    /// atomic with each other. On the first failure the run halts; the
    /// returned result carries the ids applied so far plus the failing id
    /// and cause. Errors before execution begins (unlistable directory,
    /// duplicate id, unreadable ledger) surface as `Err` instead.
    pub async fn run(&self, phase: Phase) -> EngineResult<RunResult> {
        let migrations = self.source.list(phase)?;
        log::info!(
            "{} phase: discovered {} scripts ({})",
            phase,
            migrations.len(),
            self.store.store_type()
        );

        let mut seen: HashSet<&str> = HashSet::new();
        for migration in &migrations {
            if !seen.insert(migration.id().as_str()) {
                return Err(EngineError::DuplicateScriptId {
                    id: migration.id().clone(),
                    phase,
                });
            }
        }

        let applied = self.ledger.applied_ids(phase).await?;
        let pending: Vec<_> = migrations
            .into_iter()
            .filter(|m| !applied.contains(m.id().as_str()))
            .collect();

        let mut result = RunResult::new(phase);
        if pending.is_empty() {
            log::info!("{} phase: nothing to apply", phase);
            return Ok(result);
        }

        for migration in pending {
            let id = migration.id().clone();
            result.attempted.push(id.clone());
            log::info!("applying {}", id);

            if let Err(cause) = self.execute_one(migration.as_ref()).await {
                log::error!("{}: {}", id, cause);
                result.failure = Some(RunFailure { id, cause });
                break;
            }

            if let Err(e) = self.ledger.mark_applied(phase, &id).await {
                log::error!("{}: applied but not recorded: {}", id, e);
                result.failure = Some(RunFailure {
                    id,
                    cause: FailureCause::Ledger(e.to_string()),
                });
                break;
            }
            result.applied.push(id);
        }

        log::info!(
            "{} phase: applied {} of {} pending scripts",
            phase,
            result.applied.len(),
            result.attempted.len()
        );
        Ok(result)
    }

    async fn execute_one(&self, migration: &dyn Migration) -> Result<(), FailureCause> {
        match self.script_timeout {
            Some(deadline) => {
                match tokio::time::timeout(deadline, migration.execute(self.store)).await {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(e)) => Err(FailureCause::Script(e.to_string())),
                    Err(_) => Err(FailureCause::Timeout(deadline)),
                }
            }
            None => migration
                .execute(self.store)
                .await
                .map_err(|e| FailureCause::Script(e.to_string())),
        }
    }

    /// Full ordered script list for `phase`, joined against the ledger.
    pub async fn status(&self, phase: Phase) -> EngineResult<Vec<ScriptStatus>> {
        let migrations = self.source.list(phase)?;
        let applied: HashMap<String, DateTime<Utc>> = self
            .ledger
            .applied_records(phase)
            .await?
            .into_iter()
            .map(|r| (r.id, r.applied_at))
            .collect();

        Ok(migrations
            .iter()
            .map(|m| ScriptStatus {
                applied_at: applied.get(m.id().as_str()).copied(),
                id: m.id().clone(),
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
