//! # songrank-engine
//!
//! Turns a source catalog and a song table into an ordered consensus
//! ranking with a full score breakdown per song.
//!
//! Pipeline: resolve entries against the catalog, compute per-source
//! contributions, apply the eligibility filters, then score, normalize and
//! order the eligible set. [`rank_songs`] is the stateless entry point;
//! [`RankingSession`] keeps inputs around and recomputes on every change.

pub mod aggregator;
pub mod clusters;
pub mod contribution;
pub mod engine;
pub mod filter;
pub mod multipliers;
pub mod ordering;
pub mod parity;
pub mod resolve;
pub mod session;

pub use aggregator::{rank_songs, try_rank_songs, AggregatorState};
pub use engine::RankingEngine;
pub use multipliers::Multipliers;
pub use parity::{ParityMismatch, ParityReport, ParityTolerance};
pub use session::RankingSession;
