//! Inputs to a ranking: the source catalog and the song/entry table.

pub mod rank;
pub mod song;
pub mod source;

pub use rank::EffectiveRank;
pub use song::{Song, SongEntry};
pub use source::{Source, SourceCatalog, SourceKind};
