//! `SQLite` implementation of the `ComponentRepository` trait.
//!
//! One struct serves both component tables; the `ComponentKind` passed at
//! construction decides which table the queries hit. The table name is
//! interpolated from `ComponentKind::table()`, never from caller input.

use async_trait::async_trait;
use sqlx::SqlitePool;

use lapsel_core::{Component, ComponentKind, ComponentRepository, NewComponent, RepositoryError};

use super::row_mappers::{COMPONENT_SELECT_COLUMNS, map_sqlx_error, row_to_component};

/// `SQLite` repository over the `cpu` or `gpu` table.
pub struct SqliteComponentRepository {
    pool: SqlitePool,
    kind: ComponentKind,
}

impl SqliteComponentRepository {
    /// Create a repository over the table named by `kind`.
    pub fn new(pool: SqlitePool, kind: ComponentKind) -> Self {
        Self { pool, kind }
    }

    /// Repository over the `cpu` table.
    pub fn cpu(pool: SqlitePool) -> Self {
        Self::new(pool, ComponentKind::Cpu)
    }

    /// Repository over the `gpu` table.
    pub fn gpu(pool: SqlitePool) -> Self {
        Self::new(pool, ComponentKind::Gpu)
    }

    /// The laptop column referencing this table.
    const fn fk_column(&self) -> &'static str {
        match self.kind {
            ComponentKind::Cpu => "cpu_id",
            ComponentKind::Gpu => "gpu_id",
        }
    }
}

#[async_trait]
impl ComponentRepository for SqliteComponentRepository {
    fn kind(&self) -> ComponentKind {
        self.kind
    }

    async fn list(&self) -> Result<Vec<Component>, RepositoryError> {
        let query = format!(
            "SELECT {COMPONENT_SELECT_COLUMNS} FROM {} ORDER BY id ASC",
            self.kind.table()
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(self.kind.table(), &e))?;

        rows.iter().map(row_to_component).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Component, RepositoryError> {
        let query = format!(
            "SELECT {COMPONENT_SELECT_COLUMNS} FROM {} WHERE id = ?",
            self.kind.table()
        );

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(self.kind.table(), &e))?
            .ok_or_else(|| RepositoryError::NotFound(format!("{} with ID {id}", self.kind)))?;

        row_to_component(&row)
    }

    async fn insert(&self, component: &NewComponent) -> Result<Component, RepositoryError> {
        let query = format!(
            "INSERT INTO {} (name, url, score) VALUES (?, ?, ?)",
            self.kind.table()
        );

        let result = sqlx::query(&query)
            .bind(&component.name)
            .bind(&component.url)
            .bind(component.score)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(self.kind.table(), &e))?;

        let id = result.last_insert_rowid();
        tracing::debug!(table = self.kind.table(), id, "inserted component");

        Ok(Component {
            id,
            name: component.name.clone(),
            url: component.url.clone(),
            score: component.score,
        })
    }

    async fn insert_with_id(
        &self,
        id: i64,
        component: &NewComponent,
    ) -> Result<Component, RepositoryError> {
        let query = format!(
            "INSERT INTO {} (id, name, url, score) VALUES (?, ?, ?, ?)",
            self.kind.table()
        );

        sqlx::query(&query)
            .bind(id)
            .bind(&component.name)
            .bind(&component.url)
            .bind(component.score)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(self.kind.table(), &e))?;

        Ok(Component {
            id,
            name: component.name.clone(),
            url: component.url.clone(),
            score: component.score,
        })
    }

    async fn referencing_laptops(&self, id: i64) -> Result<i64, RepositoryError> {
        let query = format!("SELECT COUNT(*) FROM laptop WHERE {} = ?", self.fk_column());

        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("laptop", &e))?;

        Ok(count)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let query = format!("DELETE FROM {} WHERE id = ?", self.kind.table());

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(self.kind.table(), &e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "{} with ID {id}",
                self.kind
            )));
        }

        tracing::debug!(table = self.kind.table(), id, "deleted component");
        Ok(())
    }
}
