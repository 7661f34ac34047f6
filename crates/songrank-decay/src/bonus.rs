use songrank_core::config::RankBonus;
use songrank_core::constants::BONUS_RANKS;

/// Bonus factor for `rank`.
///
/// The bonus is keyed on `floor(rank)`, so a fractional shadow rank such as
/// 2.5 receives the rank-2 bonus.
pub fn factor(rank: f64, bonus: &RankBonus) -> f64 {
    let floor = rank.floor();
    if !floor.is_finite() {
        return 1.0;
    }
    let position = floor as i64;
    if BONUS_RANKS.contains(&position) {
        bonus.factor(position)
    } else {
        1.0
    }
}
