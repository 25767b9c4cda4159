//! Domain services: ranking and component name matching.
//!
//! Pure functions over domain types; no storage access here.

pub mod matcher;
pub mod selector;

pub use matcher::best_match;
pub use selector::{Priorities, RankedLaptop, rank};
