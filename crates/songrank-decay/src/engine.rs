use songrank_core::config::RankingConfig;
use songrank_core::traits::IDecayFunction;

use crate::formula::{self, DecayBreakdown, DecayParams};

/// Decay function bound to one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayEngine {
    params: DecayParams,
}

impl DecayEngine {
    pub fn new(params: DecayParams) -> Self {
        Self { params }
    }

    pub fn from_config(config: &RankingConfig) -> Self {
        Self::new(DecayParams {
            mode: config.mode,
            k_value: config.k_value,
            p_exponent: config.p_exponent,
            rank_bonus: config.rank_bonus,
        })
    }

    pub fn params(&self) -> &DecayParams {
        &self.params
    }

    /// Decay value with each term broken out.
    pub fn breakdown(&self, rank: f64) -> DecayBreakdown {
        formula::compute_breakdown(rank, &self.params)
    }
}

impl Default for DecayEngine {
    fn default() -> Self {
        Self::from_config(&RankingConfig::default())
    }
}

impl IDecayFunction for DecayEngine {
    fn value(&self, rank: f64) -> f64 {
        formula::compute(rank, &self.params)
    }
}
