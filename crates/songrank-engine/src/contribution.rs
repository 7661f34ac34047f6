//! Source contributions: the decayed, weighted points each list gives a song.

use songrank_core::config::RankingConfig;
use songrank_core::models::{ClusterSummary, ExcludedEntry, SourceContribution};
use songrank_core::traits::IDecayFunction;

use crate::clusters::{self, ClusterCounter};
use crate::filter::within_cutoff;
use crate::resolve::ResolvedSong;

/// Everything the multipliers and the breakdown need from one song's
/// entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SongContributions {
    /// Surviving contributions in catalog order.
    pub contributions: Vec<SourceContribution>,
    /// Entries ranked beyond the cutoff.
    pub excluded: Vec<ExcludedEntry>,
    /// Sum of `points`, accumulated in catalog order.
    pub base_score: f64,
    pub clusters: ClusterSummary,
}

impl SongContributions {
    pub fn qualifying_count(&self) -> usize {
        self.contributions.len()
    }

    /// Effective ranks of the surviving contributions, catalog order.
    pub fn qualifying_ranks(&self) -> Vec<f64> {
        self.contributions.iter().map(|c| c.rank.value()).collect()
    }

    /// Best surviving effective rank, `None` when nothing survived.
    pub fn min_effective_rank(&self) -> Option<f64> {
        self.contributions
            .iter()
            .map(|c| c.rank.value())
            .reduce(f64::min)
    }

    /// Contributions highest points first, ties in catalog order.
    pub fn sorted_by_points(&self) -> Vec<SourceContribution> {
        let mut sorted = self.contributions.clone();
        sorted.sort_by(|a, b| b.points.total_cmp(&a.points));
        sorted
    }
}

/// Score every entry of `song`.
///
/// Entries beyond `config.rank_cutoff` are recorded as excluded and do not
/// contribute points or cluster counts. `list_count` is untouched by the
/// cutoff.
pub fn compute(
    song: &ResolvedSong<'_>,
    decay: &dyn IDecayFunction,
    config: &RankingConfig,
) -> SongContributions {
    let cutoff = config.cutoff();
    let mut contributions = Vec::with_capacity(song.entries.len());
    let mut excluded = Vec::new();
    let mut base_score = 0.0;
    let mut within_threshold = ClusterCounter::new();
    let mut all = ClusterCounter::new();

    for entry in &song.entries {
        let rank = entry.rank.value();
        if !within_cutoff(rank, cutoff) {
            excluded.push(ExcludedEntry {
                source: entry.source.name.clone(),
                rank: entry.rank,
            });
            continue;
        }

        let decay_value = decay.value(rank);
        let points = decay_value * entry.source.weight;
        base_score += points;

        if rank <= config.cluster_threshold {
            within_threshold.add(&entry.source.cluster);
        }
        all.add(&entry.source.cluster);

        contributions.push(SourceContribution {
            source: entry.source.name.clone(),
            cluster: entry.source.cluster.clone(),
            rank: entry.rank,
            decay: decay_value,
            weight: entry.source.weight,
            points,
        });
    }

    SongContributions {
        contributions,
        excluded,
        base_score,
        clusters: clusters::summarize(within_threshold, all),
    }
}
