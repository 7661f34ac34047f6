// Single source of truth for all default values.

// --- Decay ---
pub const DEFAULT_K_VALUE: f64 = 20.0;
pub const DEFAULT_P_EXPONENT: f64 = 0.55;

// --- Multipliers ---
pub const DEFAULT_CONSENSUS_BOOST: f64 = 0.03;
pub const DEFAULT_PROVOCATION_BOOST: f64 = 0.0;
pub const DEFAULT_CLUSTER_BOOST: f64 = 0.03;
pub const DEFAULT_CLUSTER_THRESHOLD: f64 = 25.0;

// --- Rank bonuses ---
pub const CONSENSUS_RANK_BONUS: [f64; 3] = [1.10, 1.075, 1.025];
// The historic conviction preset gave #1 a 25% bonus; the configurable
// ceiling is 20%.
pub const CONVICTION_RANK_BONUS: [f64; 3] = [1.20, 1.15, 1.075];

// --- Filters ---
pub const DEFAULT_MIN_SOURCES: u32 = 1;
pub const DEFAULT_RANK_CUTOFF: f64 = 0.0;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "songrank=info";
pub const DEFAULT_JSON_LOGS: bool = false;
