//! Configuration errors.

use super::error_code::{self, SongrankErrorCode};

/// Errors raised while loading or validating a ranking configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} = {value} is out of bounds [{min}, {max}]")]
    OutOfBounds {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NonFinite { field: String },

    #[error("rank bonuses must be weakly descending, got [{rank1}, {rank2}, {rank3}]")]
    BonusNotDescending { rank1: f64, rank2: f64, rank3: f64 },

    #[error("unknown ranking mode '{value}' (expected 'consensus' or 'conviction')")]
    UnknownMode { value: String },

    #[error("invalid value '{value}' for {var}: {message}")]
    InvalidEnvValue {
        var: String,
        value: String,
        message: String,
    },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to read config {path}: {message}")]
    Io { path: String, message: String },
}

impl ConfigError {
    pub(crate) fn out_of_bounds(field: &str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfBounds {
            field: field.to_string(),
            value,
            min,
            max,
        }
    }
}

impl SongrankErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } | Self::NonFinite { .. } => error_code::CONFIG_OUT_OF_BOUNDS,
            Self::BonusNotDescending { .. } | Self::UnknownMode { .. } => {
                error_code::CONFIG_INVALID
            }
            Self::InvalidEnvValue { .. }
            | Self::ParseError { .. }
            | Self::FileNotFound { .. }
            | Self::Io { .. } => error_code::CONFIG_PARSE,
        }
    }
}
