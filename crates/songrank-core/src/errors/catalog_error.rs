//! Source catalog errors.

use super::error_code::{self, SongrankErrorCode};

/// A source catalog that cannot be used for ranking.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("source name must not be empty")]
    EmptySourceName,

    #[error("duplicate source '{name}'")]
    DuplicateSource { name: String },

    #[error("source '{source_name}' has weight {weight}, expected [0, 1.5]")]
    WeightOutOfRange { source_name: String, weight: f64 },

    #[error("unranked source '{source_name}' has invalid shadow rank {shadow_rank}")]
    InvalidShadowRank {
        source_name: String,
        shadow_rank: f64,
    },
}

impl SongrankErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_INVALID
    }
}
