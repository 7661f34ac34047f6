//! # songrank-decay
//!
//! Point value of a list position.
//! Two curves: consensus `(1 + k) / (rank + k)` and conviction `1 / rank^p`,
//! followed by a bonus for positions 1 through 3.

pub mod bonus;
pub mod curve;
pub mod engine;
pub mod formula;

pub use engine::DecayEngine;
pub use formula::DecayBreakdown;
