//! Database path resolution.
//!
//! Provides the canonical path to the lapsel `SQLite` database file.

use std::fs;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// Get the path to the lapsel database file.
///
/// Returns the path to `laptops.db` in the user data directory. The
/// directory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let data_dir = data_root()?;

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join("laptops.db"))
}
