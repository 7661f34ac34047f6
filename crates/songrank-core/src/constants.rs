// Parameter bounds. Values outside these ranges are rejected, never clamped.

use std::ops::RangeInclusive;

pub const K_VALUE_BOUNDS: RangeInclusive<f64> = 0.0..=50.0;
pub const P_EXPONENT_BOUNDS: RangeInclusive<f64> = 0.0..=1.1;
pub const BOOST_BOUNDS: RangeInclusive<f64> = 0.0..=0.2;
pub const CLUSTER_THRESHOLD_BOUNDS: RangeInclusive<f64> = 0.0..=100.0;
pub const RANK_BONUS_BOUNDS: RangeInclusive<f64> = 1.0..=1.2;
pub const MIN_SOURCES_BOUNDS: RangeInclusive<u32> = 1..=10;

/// Source trust weights.
pub const SOURCE_WEIGHT_BOUNDS: RangeInclusive<f64> = 0.0..=1.5;

/// Best possible position on a list. Explicit and shadow ranks below it are
/// rejected.
pub const MIN_RANK: f64 = 1.0;

/// Top positions that earn a rank bonus.
pub const BONUS_RANKS: RangeInclusive<i64> = 1..=3;

/// Fixed-point scale for comparing normalized scores while sorting.
pub const SCORE_SORT_SCALE: f64 = 1e8;
/// Fixed-point scale for comparing fractional minimum ranks while sorting.
pub const MIN_RANK_SORT_SCALE: f64 = 100.0;

/// Multipliers are reported to the presentation layer as percentages.
pub const PERCENT: f64 = 100.0;

/// Divisor applied to the rank standard deviation in the provocation multiplier.
pub const PROVOCATION_STDDEV_SCALE: f64 = 100.0;

/// Project config file looked up in the root directory.
pub const CONFIG_FILENAME: &str = "songrank.toml";
/// Prefix of all environment overrides.
pub const ENV_PREFIX: &str = "SONGRANK_";
