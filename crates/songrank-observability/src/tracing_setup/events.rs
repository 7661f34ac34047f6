//! Structured log events for the ranking pipeline.
//!
//! Each function emits a `tracing` event with structured fields.

use songrank_core::errors::SongrankErrorCode;
use songrank_core::SongDiagnostic;

/// Log a song or entry dropped from the input.
pub fn input_dropped(diagnostic: &SongDiagnostic) {
    tracing::warn!(
        event = "input_dropped",
        code = diagnostic.error_code(),
        song = %diagnostic.song(),
        whole_song = diagnostic.drops_song(),
        "{diagnostic}"
    );
}

/// Log an aggregator state change.
pub fn state_changed(from: &str, to: &str) {
    tracing::debug!(event = "state_changed", from = %from, to = %to, "ranking state changed");
}

/// Log the outcome of a ranking run.
pub fn ranking_completed(eligible: usize, total: usize, dropped: usize, fingerprint: &str) {
    tracing::info!(
        event = "ranking_completed",
        eligible = eligible,
        total = total,
        dropped = dropped,
        fingerprint = %fingerprint,
        "Including {eligible} of {total} songs"
    );
}

/// Log a ranking run rejected by configuration validation.
pub fn config_rejected(code: &str, message: &str) {
    tracing::warn!(event = "config_rejected", code = %code, "{message}");
}
