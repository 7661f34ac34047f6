use songrank_core::config::{RankBonus, RankingMode};

use crate::{bonus, curve};

/// Parameters of the decay formula, lifted out of a ranking config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayParams {
    pub mode: RankingMode,
    pub k_value: f64,
    pub p_exponent: f64,
    pub rank_bonus: RankBonus,
}

/// Decay value of `rank`:
///
/// ```text
/// value = curve(rank) × bonus(floor(rank))
/// ```
pub fn compute(rank: f64, params: &DecayParams) -> f64 {
    curve_value(rank, params) * bonus::factor(rank, &params.rank_bonus)
}

fn curve_value(rank: f64, params: &DecayParams) -> f64 {
    match params.mode {
        RankingMode::Consensus => curve::consensus(rank, params.k_value),
        RankingMode::Conviction => curve::conviction(rank, params.p_exponent),
    }
}

/// Each term of the decay formula for debugging/observability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayBreakdown {
    pub rank: f64,
    pub curve: f64,
    pub bonus: f64,
    pub value: f64,
}

pub fn compute_breakdown(rank: f64, params: &DecayParams) -> DecayBreakdown {
    let curve = curve_value(rank, params);
    let bonus = bonus::factor(rank, &params.rank_bonus);
    DecayBreakdown {
        rank,
        curve,
        bonus,
        value: curve * bonus,
    }
}
