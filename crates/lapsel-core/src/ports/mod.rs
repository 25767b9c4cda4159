//! Port definitions (trait abstractions) for the storage layer.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused

pub mod component_repository;
pub mod laptop_repository;

use std::sync::Arc;
use thiserror::Error;

pub use component_repository::ComponentRepository;
pub use laptop_repository::LaptopRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (sqlx
/// errors) and provides a clean interface for callers to handle storage
/// failures. Referential failures get their own variant because the caller
/// can act on them (pick an existing component) while other constraint
/// violations are plain bad input.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A not-null, unique or check constraint was violated.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A foreign key does not match any existing row.
    #[error("Referential violation: {0}")]
    ForeignKey(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across
/// adapters without coupling them to concrete implementations. It lives in
/// `lapsel-core` so that handlers can accept it without depending on
/// `lapsel-db`.
#[derive(Clone)]
pub struct Repos {
    /// Repository over the `cpu` table.
    pub cpus: Arc<dyn ComponentRepository>,
    /// Repository over the `gpu` table.
    pub gpus: Arc<dyn ComponentRepository>,
    /// Repository over the `laptop` table.
    pub laptops: Arc<dyn LaptopRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        cpus: Arc<dyn ComponentRepository>,
        gpus: Arc<dyn ComponentRepository>,
        laptops: Arc<dyn LaptopRepository>,
    ) -> Self {
        Self {
            cpus,
            gpus,
            laptops,
        }
    }
}
