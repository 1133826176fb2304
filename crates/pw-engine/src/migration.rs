//! Executable migrations and script loading

use crate::error::{EngineError, EngineResult};
use async_trait::async_trait;
use futures::future::BoxFuture;
use mongodb::bson::Document;
use pw_core::{ScriptFile, ScriptId};
use pw_db::DocumentStore;
use std::path::{Path, PathBuf};

/// A single executable unit of change logic.
///
/// The engine cannot undo arbitrary document-store mutations, so a
/// migration that fails partway must be safely re-runnable from scratch;
/// that contract rests on the migration author.
#[async_trait]
pub trait Migration: Send + Sync {
    /// Sortable id; execution order within a phase is ascending id order
    fn id(&self) -> &ScriptId;

    /// Apply the change against the document store
    async fn execute(&self, store: &dyn DocumentStore) -> EngineResult<()>;
}

impl std::fmt::Debug for dyn Migration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Migration").field("id", &self.id()).finish()
    }
}

/// Loads an executable migration from a discovered script file.
///
/// The runner never depends on a specific file format; sources filter
/// discovery through `supports` and delegate to `load`.
pub trait ScriptLoader: Send + Sync {
    /// Whether this loader can handle the given file
    fn supports(&self, path: &Path) -> bool;

    /// Load the script into an executable migration
    fn load(&self, script: &ScriptFile) -> EngineResult<Box<dyn Migration>>;
}

/// A migration loaded from a `.json` file holding an ordered array of
/// database command documents, executed one by one.
#[derive(Debug)]
pub struct CommandScript {
    id: ScriptId,
    path: PathBuf,
    commands: Vec<Document>,
}

impl CommandScript {
    /// Parse the command array from `script`'s file
    pub fn load(script: &ScriptFile) -> EngineResult<Self> {
        let contents =
            std::fs::read_to_string(&script.path).map_err(|e| EngineError::ScriptLoad {
                path: script.path.display().to_string(),
                message: e.to_string(),
            })?;
        let commands: Vec<Document> =
            serde_json::from_str(&contents).map_err(|e| EngineError::ScriptLoad {
                path: script.path.display().to_string(),
                message: format!("expected a JSON array of command documents: {}", e),
            })?;
        Ok(Self {
            id: script.id.clone(),
            path: script.path.clone(),
            commands,
        })
    }

    /// Number of commands the script will run
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[async_trait]
impl Migration for CommandScript {
    fn id(&self) -> &ScriptId {
        &self.id
    }

    async fn execute(&self, store: &dyn DocumentStore) -> EngineResult<()> {
        if self.commands.is_empty() {
            log::warn!("script {} contains no commands", self.path.display());
        }
        for command in &self.commands {
            store.run_command(command.clone()).await?;
        }
        Ok(())
    }
}

/// Loader for `.json` command scripts
#[derive(Debug, Default)]
pub struct CommandFileLoader;

impl ScriptLoader for CommandFileLoader {
    fn supports(&self, path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some("json")
    }

    fn load(&self, script: &ScriptFile) -> EngineResult<Box<dyn Migration>> {
        Ok(Box::new(CommandScript::load(script)?))
    }
}

/// Async function signature for code-defined migrations
pub type MigrationFn =
    Box<dyn for<'a> Fn(&'a dyn DocumentStore) -> BoxFuture<'a, EngineResult<()>> + Send + Sync>;

/// A migration defined in Rust code rather than loaded from disk.
///
/// Used by embedders that compile their change logic in, and by tests.
pub struct CodeMigration {
    id: ScriptId,
    action: MigrationFn,
}

impl CodeMigration {
    pub fn new(id: ScriptId, action: MigrationFn) -> Self {
        Self { id, action }
    }
}

#[async_trait]
impl Migration for CodeMigration {
    fn id(&self) -> &ScriptId {
        &self.id
    }

    async fn execute(&self, store: &dyn DocumentStore) -> EngineResult<()> {
        (self.action)(store).await
    }
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
