//! Catalog import file format.
//!
//! A catalog file is a JSON document with optional `cpus`, `gpus` and
//! `laptops` arrays. Components may carry explicit ids (benchmark dumps do)
//! or omit them and let the database assign one. Laptops reference their
//! components either by explicit id or by a free-form name that is resolved
//! with the fuzzy matcher at import time.

use serde::{Deserialize, Serialize};

/// Top-level import document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub cpus: Vec<ImportComponent>,
    #[serde(default)]
    pub gpus: Vec<ImportComponent>,
    #[serde(default)]
    pub laptops: Vec<ImportLaptop>,
}

/// A cpu/gpu entry in an import file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportComponent {
    /// Explicit id to insert with; omit to let the database assign one.
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub score: i64,
}

/// A laptop entry in an import file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportLaptop {
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub composition: String,
    pub url: String,
    pub price: i64,
    pub cpu: ComponentRef,
    pub gpu: ComponentRef,
}

/// Reference to a component row: explicit id or a name to fuzzy-resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentRef {
    Id(i64),
    Name(String),
}
