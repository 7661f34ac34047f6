//! Tracing initialization, span names and event helpers.

use songrank_core::config::ObservabilityConfig;
use songrank_core::SongDiagnostic;
use songrank_observability::tracing_setup::{events, spans::names};
use songrank_observability::{init_tracing, init_tracing_with_config};

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    init_tracing_with_config(&ObservabilityConfig {
        log_filter: "songrank=debug".into(),
        json: true,
    });
    tracing::info!("still alive after repeated init");
}

#[test]
fn invalid_filter_does_not_panic() {
    init_tracing_with_config(&ObservabilityConfig {
        log_filter: "songrank=[[[".into(),
        json: false,
    });
}

#[test]
fn span_macros_use_declared_names() {
    let span = songrank_observability::rank_span!("consensus", 3usize, 2usize);
    if let Some(meta) = span.metadata() {
        assert_eq!(meta.name(), names::RANK);
    }
    let span = songrank_observability::filter_span!(1u32, 0.0f64);
    if let Some(meta) = span.metadata() {
        assert_eq!(meta.name(), names::FILTER);
    }
}

#[test]
fn span_names_share_prefix() {
    for name in [names::RANK, names::RESOLVE, names::FILTER, names::SCORE] {
        assert!(name.starts_with("songrank."), "{name}");
    }
}

#[test]
fn events_accept_diagnostics() {
    init_tracing();
    events::input_dropped(&SongDiagnostic::UnknownSource {
        song: "s1".into(),
        source_name: "Nowhere Weekly".into(),
    });
    events::state_changed("idle", "computing");
    events::ranking_completed(1, 2, 1, "abc");
    events::config_rejected("CONFIG_OUT_OF_BOUNDS", "k_value out of bounds");
}
