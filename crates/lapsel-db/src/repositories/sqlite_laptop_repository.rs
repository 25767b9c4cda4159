//! `SQLite` implementation of the `LaptopRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use lapsel_core::{Laptop, LaptopRepository, LaptopView, NewLaptop, RepositoryError};

use super::row_mappers::{
    LAPTOP_SELECT_COLUMNS, map_sqlx_error, row_to_laptop, row_to_laptop_view,
};

/// `SQLite` implementation of the `LaptopRepository` trait.
///
/// Referential integrity is the engine's job: the connection pool runs
/// with foreign keys enabled, so a dangling `cpu_id`/`gpu_id` fails the
/// insert and component deletion cascades here without any code in this
/// module.
pub struct SqliteLaptopRepository {
    pool: SqlitePool,
}

impl SqliteLaptopRepository {
    /// Create a new `SQLite` laptop repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LaptopRepository for SqliteLaptopRepository {
    async fn list(&self) -> Result<Vec<Laptop>, RepositoryError> {
        let query = format!("SELECT {LAPTOP_SELECT_COLUMNS} FROM laptop ORDER BY id ASC");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("laptop", &e))?;

        rows.iter().map(row_to_laptop).collect()
    }

    async fn list_views(&self) -> Result<Vec<LaptopView>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT laptop.id, laptop.image, laptop.description,
                laptop.composition, laptop.url, laptop.price,
                laptop.cpu_id, laptop.gpu_id,
                cpu.score AS cpu_score, gpu.score AS gpu_score,
                cpu.name AS cpu_name, gpu.name AS gpu_name
            FROM laptop
                JOIN cpu ON laptop.cpu_id = cpu.id
                JOIN gpu ON laptop.gpu_id = gpu.id
            ORDER BY laptop.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("laptop", &e))?;

        rows.iter().map(row_to_laptop_view).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Laptop, RepositoryError> {
        let query = format!("SELECT {LAPTOP_SELECT_COLUMNS} FROM laptop WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("laptop", &e))?
            .ok_or_else(|| RepositoryError::NotFound(format!("laptop with ID {id}")))?;

        row_to_laptop(&row)
    }

    async fn insert(&self, laptop: &NewLaptop) -> Result<Laptop, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO laptop (image, description, composition, url, price, cpu_id, gpu_id)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&laptop.image)
        .bind(&laptop.description)
        .bind(&laptop.composition)
        .bind(&laptop.url)
        .bind(laptop.price)
        .bind(laptop.cpu_id)
        .bind(laptop.gpu_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("laptop", &e))?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, cpu_id = laptop.cpu_id, gpu_id = laptop.gpu_id, "inserted laptop");

        Ok(Laptop {
            id,
            image: laptop.image.clone(),
            description: laptop.description.clone(),
            composition: laptop.composition.clone(),
            url: laptop.url.clone(),
            price: laptop.price,
            cpu_id: laptop.cpu_id,
            gpu_id: laptop.gpu_id,
        })
    }

    async fn update(&self, laptop: &Laptop) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE laptop
            SET image = ?, description = ?, composition = ?, url = ?,
                price = ?, cpu_id = ?, gpu_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&laptop.image)
        .bind(&laptop.description)
        .bind(&laptop.composition)
        .bind(&laptop.url)
        .bind(laptop.price)
        .bind(laptop.cpu_id)
        .bind(laptop.gpu_id)
        .bind(laptop.id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("laptop", &e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "laptop with ID {}",
                laptop.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM laptop WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("laptop", &e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("laptop with ID {id}")));
        }

        Ok(())
    }
}
