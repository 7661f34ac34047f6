use serde::{Deserialize, Serialize};

use crate::catalog::EffectiveRank;
use crate::constants::PERCENT;

/// Points one source gave a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceContribution {
    pub source: String,
    pub cluster: String,
    pub rank: EffectiveRank,
    /// Unweighted decay value, rank bonus included.
    pub decay: f64,
    pub weight: f64,
    /// `decay * weight`.
    pub points: f64,
}

/// An entry ignored because it fell below the rank cutoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedEntry {
    pub source: String,
    pub rank: EffectiveRank,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterTally {
    pub cluster: String,
    pub count: usize,
}

/// Per-cluster counts of a song's contributions, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSummary {
    /// Contributions ranked within the cluster threshold. Drives the
    /// diversity multiplier.
    pub within_threshold: Vec<ClusterTally>,
    /// Every contribution, informational only.
    pub all: Vec<ClusterTally>,
}

impl ClusterSummary {
    pub fn distinct_within_threshold(&self) -> usize {
        self.within_threshold.len()
    }

    pub fn distinct_all(&self) -> usize {
        self.all.len()
    }

    pub fn best_within_threshold(&self) -> Option<&str> {
        self.within_threshold.first().map(|t| t.cluster.as_str())
    }

    pub fn best_overall(&self) -> Option<&str> {
        self.all.first().map(|t| t.cluster.as_str())
    }

    /// `"Tastemakers:2, Mainstream:1"`
    pub fn describe_within_threshold(&self) -> String {
        describe(&self.within_threshold)
    }

    pub fn describe_all(&self) -> String {
        describe(&self.all)
    }
}

fn describe(tallies: &[ClusterTally]) -> String {
    tallies
        .iter()
        .map(|t| format!("{}:{}", t.cluster, t.count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Multiplier boosts as percentages: `(multiplier - 1) * 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplierPercentages {
    pub consensus: f64,
    pub provocation: f64,
    pub diversity: f64,
}

/// Every intermediate value behind one song's position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Sum of contribution points, in catalog order.
    pub base_score: f64,
    pub consensus_mul: f64,
    pub provocation_mul: f64,
    pub diversity_mul: f64,
    /// `base_score * consensus_mul * provocation_mul * diversity_mul`.
    pub raw_score: f64,
    /// `raw_score / max(raw_score)` over the eligible songs.
    pub normalized_score: f64,
    /// Entries in the input, before the rank cutoff.
    pub list_count: usize,
    /// Entries that survived the rank cutoff.
    pub qualifying_count: usize,
    pub min_effective_rank: f64,
    /// Highest points first.
    pub contributions: Vec<SourceContribution>,
    pub excluded_entries: Vec<ExcludedEntry>,
    pub clusters: ClusterSummary,
}

impl ScoreBreakdown {
    pub fn multiplier_percentages(&self) -> MultiplierPercentages {
        MultiplierPercentages {
            consensus: as_percent(self.consensus_mul),
            provocation: as_percent(self.provocation_mul),
            diversity: as_percent(self.diversity_mul),
        }
    }

    /// Contribution points, highest first.
    pub fn contribution_amounts(&self) -> Vec<f64> {
        self.contributions.iter().map(|c| c.points).collect()
    }
}

pub fn as_percent(multiplier: f64) -> f64 {
    (multiplier - 1.0) * PERCENT
}
