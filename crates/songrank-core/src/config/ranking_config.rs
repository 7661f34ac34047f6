use std::fmt;
use std::ops::{Deref, RangeInclusive};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{
    BOOST_BOUNDS, CLUSTER_THRESHOLD_BOUNDS, K_VALUE_BOUNDS, MIN_SOURCES_BOUNDS, P_EXPONENT_BOUNDS,
    RANK_BONUS_BOUNDS,
};
use crate::errors::ConfigError;

/// Decay curve choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// `(1 + k) / (rank + k)`: rewards broad agreement across lists.
    #[default]
    Consensus,
    /// `1 / rank^p`: rewards strong placement near the top of a list.
    Conviction,
}

impl RankingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Consensus => "consensus",
            Self::Conviction => "conviction",
        }
    }
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consensus" => Ok(Self::Consensus),
            "conviction" => Ok(Self::Conviction),
            _ => Err(ConfigError::UnknownMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Multipliers applied to the decay value of ranks 1, 2 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankBonus {
    pub rank1: f64,
    pub rank2: f64,
    pub rank3: f64,
}

impl RankBonus {
    pub const fn from_array(values: [f64; 3]) -> Self {
        Self {
            rank1: values[0],
            rank2: values[1],
            rank3: values[2],
        }
    }

    /// No bonus for any position.
    pub const fn none() -> Self {
        Self::from_array([1.0, 1.0, 1.0])
    }

    pub const fn for_mode(mode: RankingMode) -> Self {
        match mode {
            RankingMode::Consensus => Self::from_array(defaults::CONSENSUS_RANK_BONUS),
            RankingMode::Conviction => Self::from_array(defaults::CONVICTION_RANK_BONUS),
        }
    }

    /// Bonus factor for a whole-number position; 1.0 outside the top three.
    pub fn factor(&self, position: i64) -> f64 {
        match position {
            1 => self.rank1,
            2 => self.rank2,
            3 => self.rank3,
            _ => 1.0,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_bounds("rank_bonus.rank1", self.rank1, &RANK_BONUS_BOUNDS)?;
        check_bounds("rank_bonus.rank2", self.rank2, &RANK_BONUS_BOUNDS)?;
        check_bounds("rank_bonus.rank3", self.rank3, &RANK_BONUS_BOUNDS)?;
        if self.rank1 < self.rank2 || self.rank2 < self.rank3 {
            return Err(ConfigError::BonusNotDescending {
                rank1: self.rank1,
                rank2: self.rank2,
                rank3: self.rank3,
            });
        }
        Ok(())
    }
}

impl Default for RankBonus {
    fn default() -> Self {
        Self::for_mode(RankingMode::Consensus)
    }
}

/// Every tunable parameter of a ranking run.
///
/// Constructed freely (deserialized from TOML, built in tests, edited by a
/// settings form) and turned into a [`ValidatedConfig`] before it reaches
/// the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub mode: RankingMode,
    /// Consensus curve flattening constant, [0, 50].
    pub k_value: f64,
    /// Conviction curve exponent, [0, 1.1].
    pub p_exponent: f64,
    /// Maximum boost for appearing on many lists, [0, 0.2].
    pub consensus_boost: f64,
    /// Boost per 100 points of rank standard deviation, [0, 0.2].
    pub provocation_boost: f64,
    /// Boost per additional cluster within `cluster_threshold`, [0, 0.2].
    pub cluster_boost: f64,
    /// Entries ranked at or above this count toward cluster diversity, [0, 100].
    pub cluster_threshold: f64,
    /// Minimum number of list appearances, [1, 10].
    pub min_sources: u32,
    /// Entries ranked below this are ignored. 0 disables the cutoff.
    pub rank_cutoff: f64,
    pub rank_bonus: RankBonus,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            mode: RankingMode::Consensus,
            k_value: defaults::DEFAULT_K_VALUE,
            p_exponent: defaults::DEFAULT_P_EXPONENT,
            consensus_boost: defaults::DEFAULT_CONSENSUS_BOOST,
            provocation_boost: defaults::DEFAULT_PROVOCATION_BOOST,
            cluster_boost: defaults::DEFAULT_CLUSTER_BOOST,
            cluster_threshold: defaults::DEFAULT_CLUSTER_THRESHOLD,
            min_sources: defaults::DEFAULT_MIN_SOURCES,
            rank_cutoff: defaults::DEFAULT_RANK_CUTOFF,
            rank_bonus: RankBonus::default(),
        }
    }
}

impl RankingConfig {
    /// Defaults with the mode's rank bonus preset.
    pub fn for_mode(mode: RankingMode) -> Self {
        Self {
            mode,
            rank_bonus: RankBonus::for_mode(mode),
            ..Self::default()
        }
    }

    /// Active rank cutoff, `None` when unlimited.
    pub fn cutoff(&self) -> Option<f64> {
        (self.rank_cutoff > 0.0).then_some(self.rank_cutoff)
    }

    /// Check every parameter against its bounds. Returns the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_bounds("k_value", self.k_value, &K_VALUE_BOUNDS)?;
        check_bounds("p_exponent", self.p_exponent, &P_EXPONENT_BOUNDS)?;
        check_bounds("consensus_boost", self.consensus_boost, &BOOST_BOUNDS)?;
        check_bounds("provocation_boost", self.provocation_boost, &BOOST_BOUNDS)?;
        check_bounds("cluster_boost", self.cluster_boost, &BOOST_BOUNDS)?;
        check_bounds(
            "cluster_threshold",
            self.cluster_threshold,
            &CLUSTER_THRESHOLD_BOUNDS,
        )?;
        self.rank_bonus.validate()?;

        if !MIN_SOURCES_BOUNDS.contains(&self.min_sources) {
            return Err(ConfigError::out_of_bounds(
                "min_sources",
                f64::from(self.min_sources),
                f64::from(*MIN_SOURCES_BOUNDS.start()),
                f64::from(*MIN_SOURCES_BOUNDS.end()),
            ));
        }

        if !self.rank_cutoff.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "rank_cutoff".to_string(),
            });
        }
        if self.rank_cutoff < 0.0 {
            return Err(ConfigError::out_of_bounds(
                "rank_cutoff",
                self.rank_cutoff,
                0.0,
                f64::INFINITY,
            ));
        }
        Ok(())
    }

    pub fn validated(self) -> Result<ValidatedConfig, ConfigError> {
        ValidatedConfig::try_from(self)
    }
}

fn check_bounds(field: &str, value: f64, bounds: &RangeInclusive<f64>) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite {
            field: field.to_string(),
        });
    }
    if !bounds.contains(&value) {
        return Err(ConfigError::out_of_bounds(
            field,
            value,
            *bounds.start(),
            *bounds.end(),
        ));
    }
    Ok(())
}

/// A [`RankingConfig`] that passed validation. Immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RankingConfig", into = "RankingConfig")]
pub struct ValidatedConfig(RankingConfig);

impl ValidatedConfig {
    pub fn get(&self) -> &RankingConfig {
        &self.0
    }

    pub fn into_inner(self) -> RankingConfig {
        self.0
    }

    /// Content hash of every parameter.
    ///
    /// Two configs with the same fingerprint produce the same ranking for
    /// the same inputs, which lets a caller tell which request a result
    /// belongs to.
    pub fn fingerprint(&self) -> String {
        let c = &self.0;
        let mut hasher = blake3::Hasher::new();
        hasher.update(c.mode.as_str().as_bytes());
        for value in [
            c.k_value,
            c.p_exponent,
            c.consensus_boost,
            c.provocation_boost,
            c.cluster_boost,
            c.cluster_threshold,
            c.rank_bonus.rank1,
            c.rank_bonus.rank2,
            c.rank_bonus.rank3,
            f64::from(c.min_sources),
            c.rank_cutoff,
        ] {
            hasher.update(&value.to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}

impl Deref for ValidatedConfig {
    type Target = RankingConfig;

    fn deref(&self) -> &RankingConfig {
        &self.0
    }
}

impl TryFrom<RankingConfig> for ValidatedConfig {
    type Error = ConfigError;

    fn try_from(config: RankingConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self(config))
    }
}

impl From<ValidatedConfig> for RankingConfig {
    fn from(config: ValidatedConfig) -> Self {
        config.0
    }
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        Self(RankingConfig::default())
    }
}
