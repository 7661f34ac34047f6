use super::error_code::SongrankErrorCode;
use super::{CatalogError, ConfigError};

/// Fatal errors for a ranking request.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankingError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl SongrankErrorCode for RankingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
        }
    }
}

pub type RankingResult<T> = Result<T, RankingError>;
