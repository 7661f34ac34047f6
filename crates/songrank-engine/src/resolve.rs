//! Input resolution: match song entries to catalog sources and settle each
//! entry's effective rank.
//!
//! Malformed songs and entries are dropped here with a [`SongDiagnostic`];
//! everything downstream works on clean, catalog-ordered data.

use std::collections::HashSet;

use songrank_core::catalog::{EffectiveRank, Song, Source, SourceCatalog};
use songrank_core::constants::MIN_RANK;
use songrank_core::SongDiagnostic;
use songrank_observability::tracing_setup::events;

/// One entry bound to its catalog source.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedEntry<'a> {
    pub source: &'a Source,
    /// Catalog position of `source`.
    pub position: usize,
    pub rank: EffectiveRank,
}

/// A song whose entries all reference known sources, sorted by catalog
/// position.
#[derive(Debug, Clone)]
pub struct ResolvedSong<'a> {
    pub song: &'a Song,
    pub entries: Vec<ResolvedEntry<'a>>,
}

impl ResolvedSong<'_> {
    /// Resolved list appearances, before any rank cutoff.
    pub fn list_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Resolution<'a> {
    /// Surviving songs in input order.
    pub songs: Vec<ResolvedSong<'a>>,
    pub diagnostics: Vec<SongDiagnostic>,
}

/// Resolve `songs` against `catalog`.
///
/// Dropped:
/// - songs with a blank id, title or artist
/// - later songs reusing an earlier id
/// - entries naming a source missing from the catalog
/// - entries with a non-finite rank or one above first place (below 1)
/// - rankless entries on ranked sources
/// - later entries repeating a source already seen for the song
///
/// An explicit rank on an unranked source is kept as explicit.
pub fn resolve<'a>(catalog: &'a SourceCatalog, songs: &'a [Song]) -> Resolution<'a> {
    let mut seen_ids: HashSet<&str> = HashSet::with_capacity(songs.len());
    let mut resolution = Resolution {
        songs: Vec::with_capacity(songs.len()),
        diagnostics: Vec::new(),
    };

    for (index, song) in songs.iter().enumerate() {
        if let Some(field) = song.missing_identity_field() {
            resolution.diagnostics.push(SongDiagnostic::MissingRequiredField {
                song: song_label(song, index),
                field: field.to_string(),
            });
            continue;
        }
        if !seen_ids.insert(song.id.as_str()) {
            resolution.diagnostics.push(SongDiagnostic::DuplicateSongId {
                song: song.id.clone(),
            });
            continue;
        }
        let entries = resolve_entries(catalog, song, &mut resolution.diagnostics);
        resolution.songs.push(ResolvedSong { song, entries });
    }

    for diagnostic in &resolution.diagnostics {
        events::input_dropped(diagnostic);
    }
    resolution
}

fn resolve_entries<'a>(
    catalog: &'a SourceCatalog,
    song: &Song,
    diagnostics: &mut Vec<SongDiagnostic>,
) -> Vec<ResolvedEntry<'a>> {
    let mut entries: Vec<ResolvedEntry<'a>> = Vec::with_capacity(song.entries.len());

    for entry in &song.entries {
        let Some((position, source)) = catalog.lookup(&entry.source) else {
            diagnostics.push(SongDiagnostic::UnknownSource {
                song: song.id.clone(),
                source_name: entry.source.clone(),
            });
            continue;
        };

        if entries.iter().any(|e| e.position == position) {
            diagnostics.push(SongDiagnostic::DuplicateEntry {
                song: song.id.clone(),
                source_name: source.name.clone(),
            });
            continue;
        }

        let rank = match (entry.rank, source.shadow_rank()) {
            (Some(rank), _) if rank.is_finite() && rank >= MIN_RANK => {
                EffectiveRank::Explicit(rank)
            }
            (Some(rank), _) => {
                diagnostics.push(SongDiagnostic::InvalidRank {
                    song: song.id.clone(),
                    source_name: source.name.clone(),
                    rank,
                });
                continue;
            }
            (None, Some(shadow_rank)) => EffectiveRank::Shadow(shadow_rank),
            (None, None) => {
                diagnostics.push(SongDiagnostic::MissingRank {
                    song: song.id.clone(),
                    source_name: source.name.clone(),
                });
                continue;
            }
        };

        entries.push(ResolvedEntry {
            source,
            position,
            rank,
        });
    }

    entries.sort_by_key(|e| e.position);
    entries
}

fn song_label(song: &Song, index: usize) -> String {
    if song.id.trim().is_empty() {
        format!("#{index}")
    } else {
        song.id.clone()
    }
}
