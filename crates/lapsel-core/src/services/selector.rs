//! Price/performance ranking.
//!
//! A laptop's `total_score` is its components' benchmark scores weighted by
//! caller priorities and normalized against the best scores in the input
//! set. The result is ordered by price per score point, cheapest
//! performance first.

use serde::{Deserialize, Serialize};

use crate::domain::LaptopView;

/// Highest accepted cpu/gpu weight.
pub const MAX_WEIGHT: i64 = 1000;

/// Ranking priorities supplied by the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Priorities {
    /// Cpu weight, `0..=1000`.
    pub cpu: i64,
    /// Gpu weight, `0..=1000`.
    pub gpu: i64,
    /// How many laptops to return.
    pub quantity: usize,
}

impl Default for Priorities {
    /// Cpu-only ranking, ten results.
    fn default() -> Self {
        Self {
            cpu: 100,
            gpu: 0,
            quantity: 10,
        }
    }
}

impl Priorities {
    /// Clamp the weights into the accepted range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            cpu: self.cpu.clamp(0, MAX_WEIGHT),
            gpu: self.gpu.clamp(0, MAX_WEIGHT),
            quantity: self.quantity,
        }
    }
}

/// A laptop with its weighted score, borrowed from the ranked input.
#[derive(Debug, Serialize)]
pub struct RankedLaptop<'a> {
    pub laptop: &'a LaptopView,
    pub total_score: i64,
}

impl RankedLaptop<'_> {
    /// Sort key: price per score point (scaled); lower is better.
    ///
    /// Negative totals (stored scores are unchecked integers) count as
    /// zero so the divisor stays positive.
    fn value_key(&self) -> i64 {
        self.laptop.price * 1000 / (self.total_score.max(0) + 1)
    }
}

/// Rank laptops by weighted price/performance.
///
/// Scores are normalized against the per-column maxima of `views`, so the
/// best cpu in the set contributes exactly the cpu weight. A column whose
/// maximum is zero contributes nothing. Returns at most
/// `priorities.quantity` entries, best value first.
#[must_use]
pub fn rank<'a>(views: &'a [LaptopView], priorities: Priorities) -> Vec<RankedLaptop<'a>> {
    let priorities = priorities.clamped();

    let max_cpu = views.iter().map(|v| v.cpu_score).max().unwrap_or(0);
    let max_gpu = views.iter().map(|v| v.gpu_score).max().unwrap_or(0);

    let weighted = |score: i64, weight: i64, max: i64| {
        if max == 0 { 0 } else { score * weight / max }
    };

    let mut ranked: Vec<RankedLaptop<'a>> = views
        .iter()
        .map(|laptop| RankedLaptop {
            total_score: weighted(laptop.cpu_score, priorities.cpu, max_cpu)
                + weighted(laptop.gpu_score, priorities.gpu, max_gpu),
            laptop,
        })
        .collect();

    ranked.sort_by_key(RankedLaptop::value_key);
    ranked.truncate(priorities.quantity);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(id: i64, price: i64, cpu_score: i64, gpu_score: i64) -> LaptopView {
        LaptopView {
            id,
            image: String::new(),
            description: format!("laptop {id}"),
            composition: String::new(),
            url: String::new(),
            price,
            cpu_id: 1,
            gpu_id: 1,
            cpu_score,
            gpu_score,
            cpu_name: String::new(),
            gpu_name: String::new(),
        }
    }

    #[test]
    fn empty_input_ranks_empty() {
        assert!(rank(&[], Priorities::default()).is_empty());
    }

    #[test]
    fn best_value_comes_first() {
        // Same score, different price: cheaper wins.
        let views = vec![view(1, 30000, 10000, 0), view(2, 20000, 10000, 0)];
        let ranked = rank(&views, Priorities::default());
        assert_eq!(ranked[0].laptop.id, 2);
        assert_eq!(ranked[1].laptop.id, 1);
    }

    #[test]
    fn weights_shift_the_ordering() {
        // Laptop 1: strong cpu, weak gpu. Laptop 2: the other way around.
        let views = vec![view(1, 25000, 20000, 1000), view(2, 25000, 8000, 9000)];

        let cpu_heavy = rank(
            &views,
            Priorities {
                cpu: 1000,
                gpu: 0,
                quantity: 10,
            },
        );
        assert_eq!(cpu_heavy[0].laptop.id, 1);

        let gpu_heavy = rank(
            &views,
            Priorities {
                cpu: 0,
                gpu: 1000,
                quantity: 10,
            },
        );
        assert_eq!(gpu_heavy[0].laptop.id, 2);
    }

    #[test]
    fn quantity_truncates_but_never_pads() {
        let views = vec![
            view(1, 10000, 5000, 0),
            view(2, 11000, 5000, 0),
            view(3, 12000, 5000, 0),
        ];
        assert_eq!(
            rank(
                &views,
                Priorities {
                    quantity: 2,
                    ..Priorities::default()
                }
            )
            .len(),
            2
        );
        assert_eq!(
            rank(
                &views,
                Priorities {
                    quantity: 50,
                    ..Priorities::default()
                }
            )
            .len(),
            3
        );
    }

    #[test]
    fn zero_score_column_contributes_nothing() {
        // All gpu scores zero: gpu weight must not divide by zero.
        let views = vec![view(1, 10000, 5000, 0), view(2, 9000, 4000, 0)];
        let ranked = rank(
            &views,
            Priorities {
                cpu: 500,
                gpu: 500,
                quantity: 10,
            },
        );
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.total_score <= 500));
    }

    #[test]
    fn weights_are_clamped() {
        let p = Priorities {
            cpu: 5000,
            gpu: -3,
            quantity: 1,
        }
        .clamped();
        assert_eq!(p.cpu, MAX_WEIGHT);
        assert_eq!(p.gpu, 0);
    }

    #[test]
    fn negative_scores_rank_last_without_dividing_by_zero() {
        // A stored score can be any integer; a weighted total of exactly -1
        // must not zero the price/score divisor.
        let views = vec![view(1, 5000, -1, 0), view(2, 5000, 1000, 0)];
        let ranked = rank(
            &views,
            Priorities {
                cpu: 1000,
                gpu: 0,
                quantity: 10,
            },
        );
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].laptop.id, 2);
        assert_eq!(ranked[1].laptop.id, 1);
    }

    #[test]
    fn normalization_uses_set_maxima() {
        // The best cpu in the set scores exactly the cpu weight.
        let views = vec![view(1, 1, 20000, 0), view(2, 1, 10000, 0)];
        let ranked = rank(
            &views,
            Priorities {
                cpu: 1000,
                gpu: 0,
                quantity: 10,
            },
        );
        let best = ranked.iter().find(|r| r.laptop.id == 1).unwrap();
        assert_eq!(best.total_score, 1000);
    }
}
