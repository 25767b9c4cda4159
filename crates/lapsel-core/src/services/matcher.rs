//! Fuzzy component name resolution.
//!
//! Store listings spell component names loosely ("Intel Core i7 12700H",
//! "RTX3060 6GB"); benchmark rows carry the canonical form. This module
//! picks the catalog row that best matches any of the candidate strings.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::domain::{Component, ComponentKind};

/// Find the component best matching any of the candidate strings.
///
/// Component names are trimmed to their bare model string before matching.
/// The skim matcher only scores a pattern that is a subsequence of the
/// choice, so both orientations are tried: a long scraped string against a
/// catalog name, and a short user query against a longer catalog name.
/// Returns the index into `components` of the highest-scoring match, or
/// `None` when no component matches any candidate at all.
#[must_use]
pub fn best_match(
    candidates: &[&str],
    components: &[Component],
    kind: ComponentKind,
) -> Option<usize> {
    let matcher = SkimMatcherV2::default();
    let mut best: Option<(usize, i64)> = None;

    for (index, component) in components.iter().enumerate() {
        let name = component.display_name(kind);
        for candidate in candidates {
            let score = match (
                matcher.fuzzy_match(candidate, name),
                matcher.fuzzy_match(name, candidate),
            ) {
                (Some(a), Some(b)) => Some(a.max(b)),
                (a, b) => a.or(b),
            };
            if let Some(score) = score {
                if best.is_none_or(|(_, s)| score > s) {
                    best = Some((index, score));
                }
            }
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(id: i64, name: &str) -> Component {
        Component {
            id,
            name: name.to_string(),
            url: String::new(),
            score: 0,
        }
    }

    #[test]
    fn resolves_realistic_cpu_string() {
        let cpus = vec![
            component(1, "Intel Core i5-1235U @ 1.30GHz"),
            component(2, "Intel Core i7-12700H @ 2.30GHz"),
            component(3, "AMD Ryzen 7 6800H"),
        ];

        let idx = best_match(
            &["Intel Core i7-12700H (14 cores)"],
            &cpus,
            ComponentKind::Cpu,
        );
        assert_eq!(idx, Some(1));
    }

    #[test]
    fn any_candidate_can_win() {
        let gpus = vec![
            component(1, "GeForce RTX 3060 Mobile, 6GB"),
            component(2, "Radeon 680M"),
        ];

        let idx = best_match(&["gibberish", "Radeon 680M"], &gpus, ComponentKind::Gpu);
        assert_eq!(idx, Some(1));
    }

    #[test]
    fn short_query_matches_longer_catalog_name() {
        let gpus = vec![
            component(1, "GeForce RTX 3060 Mobile, 6GB"),
            component(2, "GeForce RTX 3050 Mobile, 4GB"),
        ];

        let idx = best_match(&["RTX 3060"], &gpus, ComponentKind::Gpu);
        assert_eq!(idx, Some(0));
    }

    #[test]
    fn no_match_returns_none() {
        let cpus = vec![component(1, "Intel Core i5-1235U @ 1.30GHz")];
        assert_eq!(best_match(&["zzzz"], &cpus, ComponentKind::Cpu), None);
        assert_eq!(best_match(&["i5"], &[], ComponentKind::Cpu), None);
    }
}
