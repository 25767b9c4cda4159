//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI: the database pool and repositories are instantiated here
//! and handed to command handlers through `CliContext`.

use std::path::PathBuf;

use anyhow::Result;
use lapsel_core::paths::database_path;
use lapsel_core::{ComponentKind, ComponentRepository, Repos};
use lapsel_db::{CoreFactory, setup_database};
use std::sync::Arc;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
}

impl CliConfig {
    /// Create config with the default database location.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            database_path: database_path()?,
        })
    }

    /// Override the database location.
    #[must_use]
    pub fn with_database(mut self, path: PathBuf) -> Self {
        self.database_path = path;
        self
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    repos: Repos,
    database_path: PathBuf,
}

impl CliContext {
    /// Access the repository set.
    pub fn repos(&self) -> &Repos {
        &self.repos
    }

    /// The component repository for the given table.
    pub fn components(&self, kind: ComponentKind) -> &Arc<dyn ComponentRepository> {
        match kind {
            ComponentKind::Cpu => &self.repos.cpus,
            ComponentKind::Gpu => &self.repos.gpus,
        }
    }

    /// The resolved database file path.
    pub fn database_path(&self) -> &PathBuf {
        &self.database_path
    }
}

/// Bootstrap the CLI application.
///
/// Creates the database pool (applying the schema if needed) and builds
/// the repository set.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let pool = setup_database(&config.database_path).await?;
    let repos = CoreFactory::build_repos(pool);

    Ok(CliContext {
        repos,
        database_path: config.database_path,
    })
}
