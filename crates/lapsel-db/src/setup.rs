//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with the full catalog schema. Entry points call
//! this with the resolved database path.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::Path;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Establishes a connection to the `SQLite` database file
/// 2. Creates the database file if it doesn't exist
/// 3. Creates all tables and indexes (idempotent)
///
/// Foreign-key enforcement is switched on for every connection the pool
/// hands out; `SQLite` leaves it off by default and the laptop table's
/// cascade rules depend on it.
///
/// # Errors
///
/// Returns an error if the database file cannot be opened or created, or
/// if schema creation fails.
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true),
    )
    .await?;

    create_schema(&pool).await?;

    tracing::debug!(path = %db_path.display(), "database ready");

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
/// The pool is capped at a single connection: every in-memory `SQLite`
/// connection is its own database, so a larger pool would hand out empty
/// databases.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    use sqlx::sqlite::SqlitePoolOptions;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .in_memory(true)
                .foreign_keys(true),
        )
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// It is safe to call multiple times as all operations use IF NOT EXISTS.
/// The component tables must exist before the laptop table so its foreign
/// keys have something to reference.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // Component tables share one shape; `score` is the benchmark number
    // the selector weighs.
    for table in ["cpu", "gpu"] {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                url TEXT NOT NULL,
                score INTEGER NOT NULL
            )
            "#
        ))
        .execute(pool)
        .await?;
    }

    // Laptop rows cannot outlive the component rows they reference.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS laptop (
            id INTEGER PRIMARY KEY,
            image VARCHAR(255) NOT NULL,
            description VARCHAR(255) NOT NULL,
            composition VARCHAR(255) NOT NULL,
            url VARCHAR(255) NOT NULL,
            price INTEGER NOT NULL,
            cpu_id INTEGER NOT NULL,
            gpu_id INTEGER NOT NULL,
            FOREIGN KEY (cpu_id) REFERENCES cpu (id) ON DELETE CASCADE,
            FOREIGN KEY (gpu_id) REFERENCES gpu (id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Indexes on the foreign keys for the join and for cascade scans
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_laptop_cpu ON laptop(cpu_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_laptop_gpu ON laptop(gpu_id)")
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_database() {
        let pool = setup_test_database().await.unwrap();

        // Verify tables exist by querying them
        for table in ["cpu", "gpu", "laptop"] {
            let _: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(&pool)
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let pool = setup_test_database().await.unwrap();

        let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[tokio::test]
    async fn test_schema_application_is_idempotent() {
        let pool = setup_test_database().await.unwrap();
        create_schema(&pool).await.unwrap();
        create_schema(&pool).await.unwrap();
    }
}
