//! Numerical parity between two ranking outcomes.
//!
//! Compares a reference outcome with one produced elsewhere (typically
//! deserialized from JSON) song by song, within per-field tolerances.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use songrank_core::models::{RankedSong, RankingOutcome};

/// Absolute tolerances for parity checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParityTolerance {
    /// Base score, raw score and each contribution amount.
    pub score: f64,
    pub normalized: f64,
    /// Multiplier percentages, in percentage points.
    pub percentage: f64,
}

impl Default for ParityTolerance {
    fn default() -> Self {
        Self {
            score: 0.01,
            normalized: 0.001,
            percentage: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParityMismatch {
    #[error("song '{id}' missing from candidate")]
    MissingSong { id: String },

    #[error("song '{id}' not in reference")]
    UnexpectedSong { id: String },

    #[error("song '{id}' ranked {candidate} instead of {reference}")]
    RankOrder {
        id: String,
        reference: usize,
        candidate: usize,
    },

    #[error("song '{id}' {field}: {candidate} vs {reference} (tolerance {tolerance})")]
    Field {
        id: String,
        field: String,
        reference: f64,
        candidate: f64,
        tolerance: f64,
    },

    #[error("song '{id}' has {candidate} contributions instead of {reference}")]
    ContributionCount {
        id: String,
        reference: usize,
        candidate: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParityReport {
    /// Songs present in both outcomes.
    pub compared: usize,
    pub mismatches: Vec<ParityMismatch>,
}

impl ParityReport {
    pub fn is_equivalent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare `candidate` against `reference`.
///
/// Songs are matched by id. Reports every mismatch rather than stopping at
/// the first.
pub fn compare(
    reference: &RankingOutcome,
    candidate: &RankingOutcome,
    tolerance: &ParityTolerance,
) -> ParityReport {
    let by_id: HashMap<&str, &RankedSong> = candidate
        .songs
        .iter()
        .map(|song| (song.id.as_str(), song))
        .collect();

    let mut report = ParityReport::default();

    for expected in &reference.songs {
        let Some(actual) = by_id.get(expected.id.as_str()) else {
            report.mismatches.push(ParityMismatch::MissingSong {
                id: expected.id.clone(),
            });
            continue;
        };
        report.compared += 1;
        compare_song(expected, actual, tolerance, &mut report.mismatches);
    }

    for actual in &candidate.songs {
        if reference.get(&actual.id).is_none() {
            report.mismatches.push(ParityMismatch::UnexpectedSong {
                id: actual.id.clone(),
            });
        }
    }

    tracing::debug!(
        compared = report.compared,
        mismatches = report.mismatches.len(),
        "parity check finished"
    );
    report
}

fn compare_song(
    expected: &RankedSong,
    actual: &RankedSong,
    tolerance: &ParityTolerance,
    mismatches: &mut Vec<ParityMismatch>,
) {
    let id = &expected.id;
    let reference = &expected.breakdown;
    let candidate = &actual.breakdown;

    if reference.rank != candidate.rank {
        mismatches.push(ParityMismatch::RankOrder {
            id: id.clone(),
            reference: reference.rank,
            candidate: candidate.rank,
        });
    }

    let mut check = |field: &str, r: f64, c: f64, tol: f64| {
        if !within(r, c, tol) {
            mismatches.push(ParityMismatch::Field {
                id: id.clone(),
                field: field.to_string(),
                reference: r,
                candidate: c,
                tolerance: tol,
            });
        }
    };

    check("base_score", reference.base_score, candidate.base_score, tolerance.score);
    check("raw_score", reference.raw_score, candidate.raw_score, tolerance.score);
    check(
        "normalized_score",
        reference.normalized_score,
        candidate.normalized_score,
        tolerance.normalized,
    );

    let rp = reference.multiplier_percentages();
    let cp = candidate.multiplier_percentages();
    check("consensus_percent", rp.consensus, cp.consensus, tolerance.percentage);
    check("provocation_percent", rp.provocation, cp.provocation, tolerance.percentage);
    check("diversity_percent", rp.diversity, cp.diversity, tolerance.percentage);

    let ra = reference.contribution_amounts();
    let ca = candidate.contribution_amounts();
    for (i, (r, c)) in ra.iter().zip(&ca).enumerate() {
        check(&format!("contributions[{i}]"), *r, *c, tolerance.score);
    }

    if ra.len() != ca.len() {
        mismatches.push(ParityMismatch::ContributionCount {
            id: id.clone(),
            reference: ra.len(),
            candidate: ca.len(),
        });
    }
}

fn within(reference: f64, candidate: f64, tolerance: f64) -> bool {
    (reference - candidate).abs() <= tolerance
}
