//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_component_repository;
mod sqlite_laptop_repository;

pub use sqlite_component_repository::SqliteComponentRepository;
pub use sqlite_laptop_repository::SqliteLaptopRepository;
