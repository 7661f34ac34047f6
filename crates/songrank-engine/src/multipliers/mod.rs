//! Score multipliers: consensus, provocation, diversity.
//!
//! Each multiplier is 1.0 when its boost is zero or its guard condition is
//! not met, so a disabled multiplier never changes the score.

pub mod consensus;
pub mod diversity;
pub mod provocation;

use songrank_core::config::RankingConfig;
use songrank_core::models::breakdown::as_percent;
use songrank_core::models::MultiplierPercentages;

use crate::contribution::SongContributions;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multipliers {
    pub consensus: f64,
    pub provocation: f64,
    pub diversity: f64,
}

impl Multipliers {
    pub const NEUTRAL: Self = Self {
        consensus: 1.0,
        provocation: 1.0,
        diversity: 1.0,
    };

    /// Multipliers for one eligible song.
    ///
    /// `max_list_count` is the largest qualifying count in the eligible set.
    pub fn compute(
        contributions: &SongContributions,
        max_list_count: usize,
        config: &RankingConfig,
    ) -> Self {
        Self {
            consensus: consensus::multiplier(
                contributions.qualifying_count(),
                max_list_count,
                config.consensus_boost,
            ),
            provocation: provocation::multiplier(
                &contributions.qualifying_ranks(),
                config.provocation_boost,
            ),
            diversity: diversity::multiplier(
                contributions.clusters.distinct_within_threshold(),
                config.cluster_boost,
            ),
        }
    }

    /// `base * consensus * provocation * diversity`, multiplied left to right.
    pub fn apply(&self, base_score: f64) -> f64 {
        base_score * self.consensus * self.provocation * self.diversity
    }

    /// Boosts as percentages: `(mul - 1) * 100`.
    pub fn percentages(&self) -> MultiplierPercentages {
        MultiplierPercentages {
            consensus: as_percent(self.consensus),
            provocation: as_percent(self.provocation),
            diversity: as_percent(self.diversity),
        }
    }
}

impl Default for Multipliers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
