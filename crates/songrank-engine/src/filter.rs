//! Eligibility filters.
//!
//! Two independent predicates over a song's resolved entries, composed with
//! AND. `passes_min_sources` counts every entry regardless of the rank
//! cutoff; `passes_rank_cutoff` asks whether any entry survives the cutoff.

use songrank_core::config::RankingConfig;
use songrank_core::models::ExclusionReason;

use crate::resolve::ResolvedSong;

/// True when `rank` is scored under `cutoff` (`None` = unlimited).
pub fn within_cutoff(rank: f64, cutoff: Option<f64>) -> bool {
    cutoff.map_or(true, |cutoff| rank <= cutoff)
}

pub fn passes_min_sources(song: &ResolvedSong<'_>, min_sources: u32) -> bool {
    song.list_count() >= min_sources as usize
}

pub fn passes_rank_cutoff(song: &ResolvedSong<'_>, cutoff: Option<f64>) -> bool {
    song.entries
        .iter()
        .any(|e| within_cutoff(e.rank.value(), cutoff))
}

/// Every filter the song fails. Empty means eligible.
pub fn exclusion_reasons(song: &ResolvedSong<'_>, config: &RankingConfig) -> Vec<ExclusionReason> {
    let mut reasons = Vec::new();
    if !passes_min_sources(song, config.min_sources) {
        reasons.push(ExclusionReason::BelowMinSources {
            list_count: song.list_count(),
            min_sources: config.min_sources,
        });
    }
    if !passes_rank_cutoff(song, config.cutoff()) {
        reasons.push(ExclusionReason::NoQualifyingEntries {
            list_count: song.list_count(),
            rank_cutoff: config.rank_cutoff,
        });
    }
    reasons
}
