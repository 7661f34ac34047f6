use songrank_core::models::{ClusterSummary, ClusterTally};

/// Insertion-ordered cluster counter.
///
/// Clusters are kept in first-seen order so that a stable sort by count
/// breaks ties by catalog order.
#[derive(Debug, Clone, Default)]
pub struct ClusterCounter {
    tallies: Vec<ClusterTally>,
}

impl ClusterCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, cluster: &str) {
        match self.tallies.iter_mut().find(|t| t.cluster == cluster) {
            Some(tally) => tally.count += 1,
            None => self.tallies.push(ClusterTally {
                cluster: cluster.to_string(),
                count: 1,
            }),
        }
    }

    pub fn distinct(&self) -> usize {
        self.tallies.len()
    }

    /// Tallies by count descending, ties in first-seen order.
    pub fn into_sorted(mut self) -> Vec<ClusterTally> {
        self.tallies.sort_by(|a, b| b.count.cmp(&a.count));
        self.tallies
    }
}

/// Builds both tallies of a song.
pub fn summarize(within_threshold: ClusterCounter, all: ClusterCounter) -> ClusterSummary {
    ClusterSummary {
        within_threshold: within_threshold.into_sorted(),
        all: all.into_sorted(),
    }
}
