//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use songrank_core::config::defaults::DEFAULT_LOG_FILTER;
use songrank_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "SONGRANK_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with human-readable output.
///
/// Respects `SONGRANK_LOG`, e.g. `SONGRANK_LOG=songrank_engine=debug`.
/// Falls back to `songrank=info` if the variable is unset or invalid.
///
/// Idempotent. Only the first call (of this or
/// [`init_tracing_with_config`]) installs a subscriber, and an already
/// installed global subscriber is left in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter, false);
}

/// Initialize tracing from a resolved [`ObservabilityConfig`].
///
/// The config's filter has already been layered with `SONGRANK_LOG` by
/// `EngineConfig::load`. An unparsable filter falls back to the default.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter, config.json);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let json_layer = json.then(|| {
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .json()
        });
        let text_layer = (!json).then(|| fmt::layer().with_target(true));

        let installed = tracing_subscriber::registry()
            .with(json_layer)
            .with(text_layer)
            .with(filter)
            .try_init();
        if let Err(err) = installed {
            // Goes to whichever subscriber is already global.
            tracing::debug!(error = %err, "songrank tracing not installed, keeping existing subscriber");
        }
    });
}
