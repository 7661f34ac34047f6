//! Error handling for songrank.
//! One error enum per subsystem, `thiserror` only.
//!
//! Configuration and catalog errors are fatal and reported before any
//! computation starts. Problems with individual songs are collected as
//! [`SongDiagnostic`]s alongside the ranking instead.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod ranking_error;
pub mod song_diagnostic;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::SongrankErrorCode;
pub use ranking_error::{RankingError, RankingResult};
pub use song_diagnostic::SongDiagnostic;
