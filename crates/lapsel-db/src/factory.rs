//! Composition utilities for wiring `SQLite` repositories.
//!
//! This module is focused purely on construction and contains no domain
//! logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use lapsel_core::Repos;

use crate::repositories::{SqliteComponentRepository, SqliteLaptopRepository};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    /// Returns a `Repos` struct from `lapsel-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteComponentRepository::cpu(pool.clone())),
            Arc::new(SqliteComponentRepository::gpu(pool.clone())),
            Arc::new(SqliteLaptopRepository::new(pool)),
        )
    }

    /// Create a cpu repository from a pool.
    pub fn cpu_repository(pool: SqlitePool) -> Arc<SqliteComponentRepository> {
        Arc::new(SqliteComponentRepository::cpu(pool))
    }

    /// Create a gpu repository from a pool.
    pub fn gpu_repository(pool: SqlitePool) -> Arc<SqliteComponentRepository> {
        Arc::new(SqliteComponentRepository::gpu(pool))
    }

    /// Create a laptop repository from a pool.
    pub fn laptop_repository(pool: SqlitePool) -> Arc<SqliteLaptopRepository> {
        Arc::new(SqliteLaptopRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the full schema already
/// applied, matching the production schema to ensure test parity.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Build the full repository set over this database.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }
}
