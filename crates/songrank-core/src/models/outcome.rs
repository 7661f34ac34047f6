use serde::{Deserialize, Serialize};

use super::breakdown::ScoreBreakdown;
use crate::errors::SongDiagnostic;

/// A song with its position and score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSong {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub breakdown: ScoreBreakdown,
}

impl RankedSong {
    pub fn rank(&self) -> usize {
        self.breakdown.rank
    }

    pub fn normalized_score(&self) -> f64 {
        self.breakdown.normalized_score
    }

    pub fn raw_score(&self) -> f64 {
        self.breakdown.raw_score
    }
}

/// Why a song was left out of the ranking. Both filters are evaluated
/// independently, so a song can carry both reasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Fewer list appearances than `min_sources`.
    BelowMinSources { list_count: usize, min_sources: u32 },
    /// No entry survived `rank_cutoff`, or the song had no usable entries.
    NoQualifyingEntries { list_count: usize, rank_cutoff: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedSong {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub reasons: Vec<ExclusionReason>,
}

/// Result of one ranking run.
///
/// An empty `songs` list is a valid outcome: nothing survived the filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingOutcome {
    /// Eligible songs, best first.
    pub songs: Vec<RankedSong>,
    /// Songs removed by the filters, in input order.
    pub excluded: Vec<ExcludedSong>,
    /// Songs and entries dropped from the input.
    pub diagnostics: Vec<SongDiagnostic>,
    /// Largest qualifying count among eligible songs.
    pub max_list_count: usize,
    /// Fingerprint of the configuration the ranking was computed with.
    pub config_fingerprint: String,
}

impl RankingOutcome {
    pub fn empty(config_fingerprint: String) -> Self {
        Self {
            songs: Vec::new(),
            excluded: Vec::new(),
            diagnostics: Vec::new(),
            max_list_count: 0,
            config_fingerprint,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn eligible_count(&self) -> usize {
        self.songs.len()
    }

    /// Songs that made it through input validation, eligible or not.
    pub fn total_count(&self) -> usize {
        self.songs.len() + self.excluded.len()
    }

    pub fn get(&self, id: &str) -> Option<&RankedSong> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn top(&self) -> Option<&RankedSong> {
        self.songs.first()
    }

    /// `"Including 42 of 310 songs"`
    pub fn eligibility_summary(&self) -> String {
        format!(
            "Including {} of {} songs",
            self.eligible_count(),
            self.total_count()
        )
    }
}
