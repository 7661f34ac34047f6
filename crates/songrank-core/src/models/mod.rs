//! Ranking outputs consumed by rendering and export collaborators.

pub mod breakdown;
pub mod outcome;

pub use breakdown::{
    ClusterSummary, ClusterTally, ExcludedEntry, MultiplierPercentages, ScoreBreakdown,
    SourceContribution,
};
pub use outcome::{ExcludedSong, ExclusionReason, RankedSong, RankingOutcome};
