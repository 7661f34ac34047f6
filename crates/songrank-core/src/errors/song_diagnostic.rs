//! Non-fatal input problems found while resolving the song table.

use serde::{Deserialize, Serialize};

use super::error_code::{self, SongrankErrorCode};

/// A recoverable problem with one song or one of its entries.
///
/// The offending song (or entry) is dropped and the ranking proceeds with
/// the rest of the table. `song` is the song id, or `#<index>` when the id
/// itself is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SongDiagnostic {
    #[error("song {song} is missing required field '{field}'")]
    MissingRequiredField { song: String, field: String },

    #[error("duplicate song id '{song}', later occurrence dropped")]
    DuplicateSongId { song: String },

    #[error("song {song} references unknown source '{source_name}'")]
    UnknownSource { song: String, source_name: String },

    #[error("song {song} has invalid rank {rank} for source '{source_name}'")]
    InvalidRank {
        song: String,
        source_name: String,
        rank: f64,
    },

    #[error("song {song} has no rank for ranked source '{source_name}'")]
    MissingRank { song: String, source_name: String },

    #[error("song {song} lists source '{source_name}' more than once, later entry dropped")]
    DuplicateEntry { song: String, source_name: String },
}

impl SongDiagnostic {
    /// True when the whole song was dropped, false when only one entry was.
    pub fn drops_song(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredField { .. } | Self::DuplicateSongId { .. }
        )
    }

    /// Song label the diagnostic refers to.
    pub fn song(&self) -> &str {
        match self {
            Self::MissingRequiredField { song, .. }
            | Self::DuplicateSongId { song }
            | Self::UnknownSource { song, .. }
            | Self::InvalidRank { song, .. }
            | Self::MissingRank { song, .. }
            | Self::DuplicateEntry { song, .. } => song,
        }
    }
}

impl SongrankErrorCode for SongDiagnostic {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { .. } => error_code::MISSING_REQUIRED_FIELD,
            Self::DuplicateSongId { .. } => error_code::DUPLICATE_SONG,
            Self::UnknownSource { .. }
            | Self::InvalidRank { .. }
            | Self::MissingRank { .. }
            | Self::DuplicateEntry { .. } => error_code::INVALID_ENTRY,
        }
    }
}
