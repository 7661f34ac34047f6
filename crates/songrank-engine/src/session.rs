//! Interactive ranking session.
//!
//! Holds the inputs of a ranking and recomputes from scratch whenever one of
//! them changes. A rejected configuration leaves the session untouched.

use songrank_core::catalog::{Song, SourceCatalog};
use songrank_core::config::{RankingConfig, ValidatedConfig};
use songrank_core::errors::{RankingResult, SongrankErrorCode};
use songrank_core::models::RankingOutcome;
use songrank_core::traits::IRankingEngine;
use songrank_observability::tracing_setup::events;

use crate::aggregator::AggregatorState;
use crate::engine::RankingEngine;

pub struct RankingSession<E: IRankingEngine = RankingEngine> {
    engine: E,
    catalog: SourceCatalog,
    songs: Vec<Song>,
    config: ValidatedConfig,
    state: AggregatorState,
    outcome: Option<RankingOutcome>,
}

impl RankingSession<RankingEngine> {
    pub fn new(catalog: SourceCatalog, songs: Vec<Song>, config: ValidatedConfig) -> Self {
        Self::with_engine(RankingEngine, catalog, songs, config)
    }
}

impl<E: IRankingEngine> RankingSession<E> {
    pub fn with_engine(
        engine: E,
        catalog: SourceCatalog,
        songs: Vec<Song>,
        config: ValidatedConfig,
    ) -> Self {
        Self {
            engine,
            catalog,
            songs,
            config,
            state: AggregatorState::Idle,
            outcome: None,
        }
    }

    pub fn state(&self) -> AggregatorState {
        self.state
    }

    /// Latest outcome, `None` until the first computation.
    pub fn outcome(&self) -> Option<&RankingOutcome> {
        self.outcome.as_ref()
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    pub fn catalog(&self) -> &SourceCatalog {
        &self.catalog
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Run the ranking over the current inputs.
    pub fn compute(&mut self) -> &RankingOutcome {
        self.transition(AggregatorState::Computing);
        let outcome = self.engine.rank(&self.catalog, &self.songs, &self.config);
        self.transition(AggregatorState::for_outcome(&outcome));
        self.outcome.insert(outcome)
    }

    /// Replace the configuration and recompute.
    ///
    /// Validation happens first; on error nothing changes.
    pub fn set_config(&mut self, config: RankingConfig) -> RankingResult<&RankingOutcome> {
        let validated = config.validated().map_err(|err| {
            events::config_rejected(err.error_code(), &err.to_string());
            err
        })?;
        self.config = validated;
        Ok(self.compute())
    }

    pub fn set_catalog(&mut self, catalog: SourceCatalog) -> &RankingOutcome {
        self.catalog = catalog;
        self.compute()
    }

    pub fn set_songs(&mut self, songs: Vec<Song>) -> &RankingOutcome {
        self.songs = songs;
        self.compute()
    }

    fn transition(&mut self, to: AggregatorState) {
        if self.state != to {
            events::state_changed(self.state.as_str(), to.as_str());
        }
        self.state = to;
    }
}
