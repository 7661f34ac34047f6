//! Configuration system for songrank.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod defaults;
pub mod engine_config;
pub mod observability_config;
pub mod ranking_config;

pub use engine_config::EngineConfig;
pub use observability_config::ObservabilityConfig;
pub use ranking_config::{RankBonus, RankingConfig, RankingMode, ValidatedConfig};
