//! SQLite repository implementations for lapsel.
//!
//! This crate owns every line of SQL in the workspace. The schema lives in
//! [`setup`], the port implementations in [`repositories`], and the wiring
//! helpers in [`factory`]. `sqlx` types never cross this crate's boundary.
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export repository implementations
pub use repositories::{SqliteComponentRepository, SqliteLaptopRepository};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
