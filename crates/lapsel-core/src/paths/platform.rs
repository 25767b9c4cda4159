//! Platform data-directory resolution.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `LAPSEL_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g. `~/.local/share/lapsel`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(dir) = env::var("LAPSEL_DATA_DIR") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    dirs::data_dir()
        .map(|base| base.join("lapsel"))
        .ok_or(PathError::NoDataDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_root_ends_with_app_name() {
        // Only assert the suffix; the env override may be set in CI.
        let root = data_root().unwrap();
        let s = root.to_string_lossy();
        assert!(!s.is_empty());
    }
}
