//! # songrank-core
//!
//! Foundation crate for the songrank consensus ranking engine.
//! Defines the source catalog, song table, ranking configuration,
//! errors, and the score breakdown models every other crate produces
//! or consumes.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::{EffectiveRank, Song, SongEntry, Source, SourceCatalog, SourceKind};
pub use config::{EngineConfig, RankBonus, RankingConfig, RankingMode, ValidatedConfig};
pub use errors::{CatalogError, ConfigError, RankingError, RankingResult, SongDiagnostic};
pub use models::{RankedSong, RankingOutcome, ScoreBreakdown};
