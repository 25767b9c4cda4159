//! Core domain types and port definitions for lapsel.
//!
//! This crate holds everything the adapters share: the catalog domain
//! types (components, laptops, joined views), the repository traits the
//! storage layer implements, the selector/ranking logic, and path
//! resolution for the on-disk database.
//!
//! # Design Rules
//!
//! - No `sqlx` types anywhere in this crate
//! - Repository traits are minimal and CRUD-focused
//! - Ranking and name matching are pure functions over domain types

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    CatalogFile, Component, ComponentKind, ComponentRef, ImportComponent, ImportLaptop, Laptop,
    LaptopView, NewComponent, NewLaptop,
};
pub use ports::{ComponentRepository, LaptopRepository, Repos, RepositoryError};
pub use services::{Priorities, RankedLaptop, best_match, rank};

// Re-export path utilities
pub use paths::{PathError, data_root, database_path};
