//! Paths command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Print the resolved database location.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("Database: {}", ctx.database_path().display());
    Ok(())
}
