//! User input utilities for interactive command-line prompts.

use anyhow::{Context, Result};
use std::io;

/// Prompts the user for a yes/no confirmation.
///
/// Returns `true` only for an explicit `y`/`yes` answer (case-insensitive);
/// anything else, including an empty line, is treated as no.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    println!("{prompt} [y/N]: ");

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;

    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
