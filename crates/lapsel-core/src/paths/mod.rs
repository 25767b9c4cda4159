//! Path resolution for application data.
//!
//! Resolves where the catalog database lives on disk. The CLI can override
//! the location per invocation; these are the defaults.

mod database;
mod error;
mod platform;

pub use database::database_path;
pub use error::PathError;
pub use platform::data_root;
