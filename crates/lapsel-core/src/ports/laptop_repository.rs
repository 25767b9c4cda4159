//! Laptop repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Laptop, LaptopView, NewLaptop};

/// Repository for laptop persistence operations.
///
/// Inserts and updates are subject to the referential invariant: a laptop
/// row never carries a `cpu_id`/`gpu_id` that doesn't match an existing
/// component row. Violations surface as `RepositoryError::ForeignKey`.
#[async_trait]
pub trait LaptopRepository: Send + Sync {
    /// List all laptops, ordered by id ascending.
    async fn list(&self) -> Result<Vec<Laptop>, RepositoryError>;

    /// List all laptops joined with their components' scores and names.
    async fn list_views(&self) -> Result<Vec<LaptopView>, RepositoryError>;

    /// Get a laptop by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the row doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Laptop, RepositoryError>;

    /// Insert a new laptop into the catalog.
    ///
    /// Returns the persisted laptop with its assigned ID.
    /// Returns `Err(RepositoryError::ForeignKey)` if `cpu_id` or `gpu_id`
    /// doesn't reference an existing component.
    async fn insert(&self, laptop: &NewLaptop) -> Result<Laptop, RepositoryError>;

    /// Update an existing laptop.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the laptop doesn't exist.
    async fn update(&self, laptop: &Laptop) -> Result<(), RepositoryError>;

    /// Delete a laptop by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the laptop doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
