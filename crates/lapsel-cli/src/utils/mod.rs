//! CLI-local utilities.

pub mod input;
