//! Aggregator: filter, score, normalize and order the eligible set.
//!
//! Every call recomputes from the inputs. Nothing is cached between runs.

use std::fmt;

use serde::{Deserialize, Serialize};
use songrank_core::catalog::{Song, SourceCatalog};
use songrank_core::config::{RankingConfig, ValidatedConfig};
use songrank_core::errors::{RankingResult, SongrankErrorCode};
use songrank_core::models::{ExcludedSong, RankedSong, RankingOutcome, ScoreBreakdown};
use songrank_decay::DecayEngine;
use songrank_observability::tracing_setup::events;
use songrank_observability::{filter_span, rank_span, resolve_span, score_span};

use crate::contribution::{self, SongContributions};
use crate::filter;
use crate::multipliers::Multipliers;
use crate::ordering::SortKey;
use crate::resolve::{self, ResolvedSong};

/// Lifecycle of a ranking computation.
///
/// `Idle → Computing → Ranked`, or `Computing → Empty` when no song is
/// eligible. Any input change goes back to `Computing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregatorState {
    Idle,
    Computing,
    Ranked,
    Empty,
}

impl AggregatorState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Computing => "computing",
            Self::Ranked => "ranked",
            Self::Empty => "empty",
        }
    }

    /// Terminal state for a finished outcome.
    pub fn for_outcome(outcome: &RankingOutcome) -> Self {
        if outcome.is_empty() {
            Self::Empty
        } else {
            Self::Ranked
        }
    }
}

impl fmt::Display for AggregatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An eligible song carried through scoring.
struct Candidate<'a> {
    song: &'a Song,
    list_count: usize,
    contributions: SongContributions,
    multipliers: Multipliers,
    raw_score: f64,
}

/// Rank `songs` against `catalog` under `config`.
///
/// Pure: identical inputs give identical output, scores bit for bit.
/// Malformed input is reported in `diagnostics`; an empty eligible set is a
/// valid, empty outcome.
pub fn rank_songs(
    catalog: &SourceCatalog,
    songs: &[Song],
    config: &ValidatedConfig,
) -> RankingOutcome {
    let config_ref: &RankingConfig = config.get();
    let span = rank_span!(config_ref.mode, songs.len(), catalog.len());
    let _guard = span.enter();

    let fingerprint = config.fingerprint();
    let decay = DecayEngine::from_config(config_ref);

    let resolution = {
        let _resolve = resolve_span!(songs.len()).entered();
        resolve::resolve(catalog, songs)
    };

    let (eligible, excluded) = {
        let _filter =
            filter_span!(config_ref.min_sources, config_ref.rank_cutoff).entered();
        partition(&resolution.songs, &decay, config_ref)
    };

    let mut outcome = RankingOutcome::empty(fingerprint);
    outcome.excluded = excluded;
    outcome.diagnostics = resolution.diagnostics;

    if eligible.is_empty() {
        tracing::debug!("no eligible songs");
        finish(&outcome);
        return outcome;
    }

    let max_list_count = eligible
        .iter()
        .map(|(_, c)| c.qualifying_count())
        .max()
        .unwrap_or(0);

    let _score = score_span!(eligible.len(), max_list_count).entered();

    let candidates: Vec<Candidate<'_>> = eligible
        .into_iter()
        .map(|(song, contributions)| {
            let multipliers = Multipliers::compute(&contributions, max_list_count, config_ref);
            let raw_score = multipliers.apply(contributions.base_score);
            Candidate {
                song: song.song,
                list_count: song.list_count(),
                contributions,
                multipliers,
                raw_score,
            }
        })
        .collect();

    let max_raw = candidates
        .iter()
        .map(|c| c.raw_score)
        .fold(0.0_f64, f64::max);

    let mut keyed: Vec<(SortKey, f64, Candidate<'_>)> = candidates
        .into_iter()
        .map(|candidate| {
            let normalized = normalize(candidate.raw_score, max_raw);
            let key = SortKey::new(
                normalized,
                candidate.contributions.qualifying_count(),
                candidate
                    .contributions
                    .min_effective_rank()
                    .unwrap_or(f64::INFINITY),
                &candidate.song.title,
                &candidate.song.artist,
            );
            (key, normalized, candidate)
        })
        .collect();
    // Stable: equal keys keep input order.
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    outcome.max_list_count = max_list_count;
    outcome.songs = keyed
        .into_iter()
        .enumerate()
        .map(|(position, (_, normalized, candidate))| {
            into_ranked(position + 1, normalized, candidate)
        })
        .collect();

    finish(&outcome);
    outcome
}

/// Validate `config`, then [`rank_songs`].
///
/// Out-of-bounds parameters are rejected before any computation.
pub fn try_rank_songs(
    catalog: &SourceCatalog,
    songs: &[Song],
    config: &RankingConfig,
) -> RankingResult<RankingOutcome> {
    let validated = match config.clone().validated() {
        Ok(validated) => validated,
        Err(err) => {
            events::config_rejected(err.error_code(), &err.to_string());
            return Err(err.into());
        }
    };
    Ok(rank_songs(catalog, songs, &validated))
}

/// Split resolved songs into eligible (with contributions) and excluded.
fn partition<'s, 'a>(
    songs: &'s [ResolvedSong<'a>],
    decay: &DecayEngine,
    config: &RankingConfig,
) -> (Vec<(&'s ResolvedSong<'a>, SongContributions)>, Vec<ExcludedSong>) {
    let mut eligible = Vec::with_capacity(songs.len());
    let mut excluded = Vec::new();

    for song in songs {
        let reasons = filter::exclusion_reasons(song, config);
        if reasons.is_empty() {
            eligible.push((song, contribution::compute(song, decay, config)));
        } else {
            tracing::trace!(song = %song.song.id, ?reasons, "song excluded");
            excluded.push(ExcludedSong {
                id: song.song.id.clone(),
                title: song.song.title.clone(),
                artist: song.song.artist.clone(),
                reasons,
            });
        }
    }
    (eligible, excluded)
}

/// `raw / max_raw`, or 0 when every raw score is 0.
fn normalize(raw_score: f64, max_raw: f64) -> f64 {
    if max_raw > 0.0 {
        raw_score / max_raw
    } else {
        0.0
    }
}

fn into_ranked(rank: usize, normalized_score: f64, candidate: Candidate<'_>) -> RankedSong {
    let Candidate {
        song,
        list_count,
        contributions,
        multipliers,
        raw_score,
    } = candidate;

    let breakdown = ScoreBreakdown {
        rank,
        base_score: contributions.base_score,
        consensus_mul: multipliers.consensus,
        provocation_mul: multipliers.provocation,
        diversity_mul: multipliers.diversity,
        raw_score,
        normalized_score,
        list_count,
        qualifying_count: contributions.qualifying_count(),
        min_effective_rank: contributions.min_effective_rank().unwrap_or(f64::INFINITY),
        contributions: contributions.sorted_by_points(),
        excluded_entries: contributions.excluded,
        clusters: contributions.clusters,
    };

    RankedSong {
        id: song.id.clone(),
        title: song.title.clone(),
        artist: song.artist.clone(),
        breakdown,
    }
}

fn finish(outcome: &RankingOutcome) {
    let dropped = outcome.diagnostics.iter().filter(|d| d.drops_song()).count();
    events::ranking_completed(
        outcome.eligible_count(),
        outcome.total_count(),
        dropped,
        &outcome.config_fingerprint,
    );
}
