//! Laptop domain types.

use serde::{Deserialize, Serialize};

/// A laptop that exists in the catalog with a database ID.
///
/// `cpu_id`/`gpu_id` always reference existing component rows; the storage
/// layer rejects inserts that would dangle and cascade-deletes laptops when
/// their component is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Laptop {
    /// Database ID of the laptop (always present for persisted rows).
    pub id: i64,
    /// Product image URL.
    pub image: String,
    /// Short marketing description of the offer.
    pub description: String,
    /// Hardware composition string (panel, RAM, storage, ...).
    pub composition: String,
    /// Product page URL.
    pub url: String,
    /// Price in the store's minor currency unit.
    pub price: i64,
    /// Referenced `cpu.id`.
    pub cpu_id: i64,
    /// Referenced `gpu.id`.
    pub gpu_id: i64,
}

/// A laptop to be inserted into the catalog (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLaptop {
    pub image: String,
    pub description: String,
    pub composition: String,
    pub url: String,
    pub price: i64,
    /// Referenced `cpu.id`; must exist at insert time.
    pub cpu_id: i64,
    /// Referenced `gpu.id`; must exist at insert time.
    pub gpu_id: i64,
}

/// A laptop joined with its components' benchmark data.
///
/// This is what the selector ranks: the laptop row plus the scores and
/// names pulled from the referenced `cpu` and `gpu` rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaptopView {
    pub id: i64,
    pub image: String,
    pub description: String,
    pub composition: String,
    pub url: String,
    pub price: i64,
    pub cpu_id: i64,
    pub gpu_id: i64,
    /// Benchmark score of the referenced cpu.
    pub cpu_score: i64,
    /// Benchmark score of the referenced gpu.
    pub gpu_score: i64,
    /// Name of the referenced cpu (stored form).
    pub cpu_name: String,
    /// Name of the referenced gpu (stored form).
    pub gpu_name: String,
}

impl LaptopView {
    /// First segment of the description, for narrow table columns.
    ///
    /// Store descriptions chain spec fragments with `/`; the first one is
    /// the product name.
    #[must_use]
    pub fn short_description(&self) -> &str {
        self.description
            .split('/')
            .next()
            .unwrap_or(&self.description)
            .trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(description: &str) -> LaptopView {
        LaptopView {
            id: 1,
            image: String::new(),
            description: description.to_string(),
            composition: String::new(),
            url: String::new(),
            price: 0,
            cpu_id: 1,
            gpu_id: 1,
            cpu_score: 0,
            gpu_score: 0,
            cpu_name: String::new(),
            gpu_name: String::new(),
        }
    }

    #[test]
    fn short_description_takes_first_segment() {
        let v = view("Acer Nitro 5 / 15.6\" IPS / 16GB RAM");
        assert_eq!(v.short_description(), "Acer Nitro 5");
    }

    #[test]
    fn short_description_without_separator() {
        let v = view("ThinkPad X1");
        assert_eq!(v.short_description(), "ThinkPad X1");
    }
}
