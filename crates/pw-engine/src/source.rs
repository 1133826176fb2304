//! Migration sources
//!
//! A source yields the full ordered migration list for a phase. The
//! directory source is the normal path; the code source serves embedders
//! and tests.

use crate::error::EngineResult;
use crate::migration::{CommandFileLoader, Migration, ScriptLoader};
use pw_core::{list_scripts, Config, Phase};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Yields the ordered migration list for a phase
pub trait MigrationSource: Send + Sync {
    /// All migrations for `phase`, ascending by id
    fn list(&self, phase: Phase) -> EngineResult<Vec<Arc<dyn Migration>>>;
}

/// Source backed by the `before/` and `after/` script directories.
pub struct DirectorySource {
    before_dir: PathBuf,
    after_dir: PathBuf,
    loader: Box<dyn ScriptLoader>,
}

impl DirectorySource {
    /// Source over explicit phase directories with the default loader
    pub fn new(before_dir: PathBuf, after_dir: PathBuf) -> Self {
        Self::with_loader(before_dir, after_dir, Box::new(CommandFileLoader))
    }

    /// Source with a custom script loader
    pub fn with_loader(
        before_dir: PathBuf,
        after_dir: PathBuf,
        loader: Box<dyn ScriptLoader>,
    ) -> Self {
        Self {
            before_dir,
            after_dir,
            loader,
        }
    }

    /// Source over the phase directories named by `config`
    pub fn from_config(root: &Path, config: &Config) -> Self {
        Self::new(
            config.phase_dir(root, Phase::Before),
            config.phase_dir(root, Phase::After),
        )
    }

    fn dir(&self, phase: Phase) -> &Path {
        match phase {
            Phase::Before => &self.before_dir,
            Phase::After => &self.after_dir,
        }
    }
}

impl MigrationSource for DirectorySource {
    fn list(&self, phase: Phase) -> EngineResult<Vec<Arc<dyn Migration>>> {
        let dir = self.dir(phase);
        // A directory that was never created means nothing to migrate; a
        // directory that exists but cannot be listed is an error.
        if !dir.exists() {
            log::debug!("{} directory {} does not exist", phase, dir.display());
            return Ok(Vec::new());
        }

        let mut migrations: Vec<Arc<dyn Migration>> = Vec::new();
        for script in list_scripts(dir)? {
            if !self.loader.supports(&script.path) {
                log::debug!("no loader for {}, skipping", script.path.display());
                continue;
            }
            migrations.push(Arc::from(self.loader.load(&script)?));
        }
        Ok(migrations)
    }
}

/// In-memory source of code-defined migrations, registered per phase.
#[derive(Default)]
pub struct CodeSource {
    before: Vec<Arc<dyn Migration>>,
    after: Vec<Arc<dyn Migration>>,
}

impl CodeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a migration for a phase
    pub fn add(&mut self, phase: Phase, migration: Arc<dyn Migration>) {
        match phase {
            Phase::Before => self.before.push(migration),
            Phase::After => self.after.push(migration),
        }
    }
}

impl MigrationSource for CodeSource {
    fn list(&self, phase: Phase) -> EngineResult<Vec<Arc<dyn Migration>>> {
        let mut migrations = match phase {
            Phase::Before => self.before.clone(),
            Phase::After => self.after.clone(),
        };
        migrations.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(migrations)
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
