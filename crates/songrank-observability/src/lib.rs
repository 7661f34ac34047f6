//! # songrank-observability
//!
//! Tracing subscriber setup (`SONGRANK_LOG`), span definitions for each
//! ranking stage, and structured events for dropped input and run summaries.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_config};
