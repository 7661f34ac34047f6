//! Top-level songrank configuration with layered resolution.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, RankingConfig, ValidatedConfig};
use crate::constants::{CONFIG_FILENAME, ENV_PREFIX};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SONGRANK_*`)
/// 2. Project config (`songrank.toml` in the root directory)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub ranking: RankingConfig,
    pub observability: ObservabilityConfig,
}

impl EngineConfig {
    /// Load configuration for `root` and validate the ranking parameters.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.ranking.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `SONGRANK_*` overrides read through `lookup`.
    ///
    /// A value that does not parse is an error rather than being skipped,
    /// so a typo in the environment never silently falls back to a default.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let r = &mut self.ranking;
        override_value(&lookup, "MODE", &mut r.mode)?;
        override_value(&lookup, "K_VALUE", &mut r.k_value)?;
        override_value(&lookup, "P_EXPONENT", &mut r.p_exponent)?;
        override_value(&lookup, "CONSENSUS_BOOST", &mut r.consensus_boost)?;
        override_value(&lookup, "PROVOCATION_BOOST", &mut r.provocation_boost)?;
        override_value(&lookup, "CLUSTER_BOOST", &mut r.cluster_boost)?;
        override_value(&lookup, "CLUSTER_THRESHOLD", &mut r.cluster_threshold)?;
        override_value(&lookup, "RANK1_BONUS", &mut r.rank_bonus.rank1)?;
        override_value(&lookup, "RANK2_BONUS", &mut r.rank_bonus.rank2)?;
        override_value(&lookup, "RANK3_BONUS", &mut r.rank_bonus.rank3)?;
        override_value(&lookup, "MIN_SOURCES", &mut r.min_sources)?;
        override_value(&lookup, "RANK_CUTOFF", &mut r.rank_cutoff)?;
        override_value(&lookup, "LOG", &mut self.observability.log_filter)?;
        override_value(&lookup, "LOG_JSON", &mut self.observability.json)?;
        Ok(())
    }

    pub fn validated_ranking(&self) -> Result<ValidatedConfig, ConfigError> {
        self.ranking.clone().validated()
    }
}

fn override_value<F, T>(lookup: &F, suffix: &str, target: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let var = format!("{ENV_PREFIX}{suffix}");
    if let Some(raw) = lookup(&var) {
        *target = raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.clone(),
                value: raw.clone(),
                message: e.to_string(),
            })?;
    }
    Ok(())
}
