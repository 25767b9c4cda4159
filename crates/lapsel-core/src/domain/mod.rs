//! Domain types for the laptop catalog.
//!
//! These types represent catalog rows in the system, independent of any
//! infrastructure concerns (database, import files, etc.).

mod component;
mod import;
mod laptop;

pub use component::{Component, ComponentKind, NewComponent};
pub use import::{CatalogFile, ComponentRef, ImportComponent, ImportLaptop};
pub use laptop::{Laptop, LaptopView, NewLaptop};
