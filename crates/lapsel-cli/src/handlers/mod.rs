//! Command handlers.
//!
//! One module per command family. Handlers receive the bootstrapped
//! `CliContext` and delegate storage work to the repositories.

pub mod component;
pub mod import;
pub mod laptop;
pub mod paths;
pub mod rank;
