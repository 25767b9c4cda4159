//! Component (cpu/gpu) domain types.
//!
//! The `cpu` and `gpu` tables share one row shape, so a single type serves
//! both. `ComponentKind` names the table a row belongs to and carries the
//! per-kind display rules.

use serde::{Deserialize, Serialize};

/// Which component table a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Cpu,
    Gpu,
}

impl ComponentKind {
    /// Table name in the database.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
        }
    }

    /// Trim a benchmark-site name down to the bare model string.
    ///
    /// Cpu names carry a clock-speed suffix after `@`, gpu names a variant
    /// list after the first comma.
    #[must_use]
    pub fn trim_name(self, raw: &str) -> &str {
        let head = match self {
            Self::Cpu => raw.split('@').next(),
            Self::Gpu => raw.split(',').next(),
        };
        head.unwrap_or(raw).trim()
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table())
    }
}

/// A persisted cpu or gpu row with a database ID.
///
/// Use `NewComponent` for rows that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Database ID (always present for persisted rows).
    pub id: i64,
    /// Component name as stored (benchmark-site form).
    pub name: String,
    /// Source URL for the benchmark entry.
    pub url: String,
    /// Benchmark score used for ranking.
    pub score: i64,
}

impl Component {
    /// The name with the benchmark-site suffix trimmed off.
    #[must_use]
    pub fn display_name(&self, kind: ComponentKind) -> &str {
        kind.trim_name(&self.name)
    }
}

/// A component to be inserted (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComponent {
    pub name: String,
    pub url: String,
    pub score: i64,
}

impl NewComponent {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            score,
        }
    }
}
