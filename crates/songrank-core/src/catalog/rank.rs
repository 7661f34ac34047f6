use serde::{Deserialize, Serialize};

/// The rank a song entry is scored at.
///
/// Unranked "top N" lists carry no position for their songs, so their
/// entries are scored at the source's shadow rank: the midpoint of the
/// range the list covers. The variant records which of the two a score
/// was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rank", rename_all = "snake_case")]
pub enum EffectiveRank {
    /// Position published by the source.
    Explicit(f64),
    /// Approximated position for an unranked source.
    Shadow(f64),
}

impl EffectiveRank {
    /// The numeric rank used in scoring.
    pub fn value(self) -> f64 {
        match self {
            Self::Explicit(rank) | Self::Shadow(rank) => rank,
        }
    }

    pub fn is_shadow(self) -> bool {
        matches!(self, Self::Shadow(_))
    }
}

/// Shadow rank of an unranked list covering positions `first..=last`.
///
/// A list of the year's top 25 gives 13.0; a list covering places
/// 26 through 125 gives 75.5.
pub fn shadow_midpoint(first: u32, last: u32) -> f64 {
    (f64::from(first) + f64::from(last)) / 2.0
}
