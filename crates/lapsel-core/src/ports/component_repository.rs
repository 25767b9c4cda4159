//! Component repository trait definition.
//!
//! One implementation of this port exists per component table (`cpu`,
//! `gpu`); both share the trait because the tables share a shape.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Component, ComponentKind, NewComponent};

/// Repository for cpu/gpu persistence operations.
#[async_trait]
pub trait ComponentRepository: Send + Sync {
    /// Which table this repository serves.
    fn kind(&self) -> ComponentKind;

    /// List all components, ordered by id ascending.
    async fn list(&self) -> Result<Vec<Component>, RepositoryError>;

    /// Get a component by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the row doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Component, RepositoryError>;

    /// Insert a new component, letting the database assign the ID.
    ///
    /// Returns the persisted component with its assigned ID.
    async fn insert(&self, component: &NewComponent) -> Result<Component, RepositoryError>;

    /// Insert a component with an explicit ID (benchmark dumps carry ids).
    ///
    /// Returns `Err(RepositoryError::Constraint)` if the ID is taken.
    async fn insert_with_id(
        &self,
        id: i64,
        component: &NewComponent,
    ) -> Result<Component, RepositoryError>;

    /// Count the laptops referencing a component.
    ///
    /// Deleting the component will cascade to exactly this many laptop rows.
    async fn referencing_laptops(&self, id: i64) -> Result<i64, RepositoryError>;

    /// Delete a component by ID, cascading to referencing laptops.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the row doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
