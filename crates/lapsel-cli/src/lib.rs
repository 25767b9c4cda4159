//! CLI interface for the lapsel laptop catalog.
//!
//! Command parsing lives in [`parser`] and [`commands`], infrastructure
//! wiring in [`bootstrap`], per-command logic in [`handlers`], and output
//! formatting in [`presentation`].

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, ComponentCommand, LaptopCommand};
pub use parser::Cli;
