//! Shared CLI presentation utilities.
//!
//! Format-only helpers: no domain transforms here.

pub mod tables;

pub use tables::{print_separator, truncate_string};
