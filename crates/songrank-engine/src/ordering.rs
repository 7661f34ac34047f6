//! Deterministic ordering of scored songs.
//!
//! Scores and ranks are compared as fixed-point integers so that floating
//! noise below display precision never reorders songs.

use std::cmp::Ordering;

use songrank_core::constants::{MIN_RANK_SORT_SCALE, SCORE_SORT_SCALE};

/// Sort key of one eligible song. `Ord` puts the best song first.
///
/// 1. normalized score, descending
/// 2. qualifying count, descending
/// 3. best effective rank, ascending
/// 4. title, case-insensitive ascending
/// 5. artist, case-insensitive ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    score: i64,
    qualifying_count: usize,
    min_rank: i64,
    title: String,
    artist: String,
}

impl SortKey {
    pub fn new(
        normalized_score: f64,
        qualifying_count: usize,
        min_effective_rank: f64,
        title: &str,
        artist: &str,
    ) -> Self {
        Self {
            score: fixed_point(normalized_score, SCORE_SORT_SCALE),
            qualifying_count,
            min_rank: fixed_point(min_effective_rank, MIN_RANK_SORT_SCALE),
            title: title.to_lowercase(),
            artist: artist.to_lowercase(),
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.qualifying_count.cmp(&self.qualifying_count))
            .then_with(|| self.min_rank.cmp(&other.min_rank))
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.artist.cmp(&other.artist))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `round(value * scale)` as an integer. Saturates on overflow; NaN maps
/// to 0.
pub fn fixed_point(value: f64, scale: f64) -> i64 {
    (value * scale).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_below_precision_is_a_tie() {
        let a = SortKey::new(0.5, 2, 3.0, "a", "x");
        let b = SortKey::new(0.5 + 1e-12, 2, 3.0, "a", "x");
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn higher_score_first() {
        let a = SortKey::new(0.9, 1, 50.0, "z", "z");
        let b = SortKey::new(0.8, 5, 1.0, "a", "a");
        assert!(a < b);
    }

    #[test]
    fn more_lists_then_better_rank() {
        let more = SortKey::new(0.5, 3, 40.0, "z", "z");
        let fewer = SortKey::new(0.5, 2, 1.0, "a", "a");
        assert!(more < fewer);

        let better = SortKey::new(0.5, 2, 6.7, "z", "z");
        let worse = SortKey::new(0.5, 2, 6.71, "a", "a");
        assert!(better < worse);
    }

    #[test]
    fn title_then_artist_ignoring_case() {
        let a = SortKey::new(0.5, 2, 3.0, "A Song", "Z");
        let b = SortKey::new(0.5, 2, 3.0, "b song", "A");
        assert!(a < b);

        let x = SortKey::new(0.5, 2, 3.0, "Same", "abba");
        let y = SortKey::new(0.5, 2, 3.0, "same", "Beck");
        assert!(x < y);
    }
}
