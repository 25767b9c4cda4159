//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Command-line interface definition for the laptop catalog tool.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "lapsel")]
#[command(about = "Manage a laptop catalog and rank offers by price/performance")]
#[command(version)]
pub struct Cli {
    /// Override the database file for this invocation
    #[arg(long = "database", global = true, env = "LAPSEL_DB")]
    pub database: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
