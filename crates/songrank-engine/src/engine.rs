use songrank_core::catalog::{Song, SourceCatalog};
use songrank_core::config::ValidatedConfig;
use songrank_core::models::RankingOutcome;
use songrank_core::traits::IRankingEngine;

use crate::aggregator;

/// Default ranking engine: a stateless wrapper around [`aggregator::rank_songs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine;

impl RankingEngine {
    pub fn new() -> Self {
        Self
    }
}

impl IRankingEngine for RankingEngine {
    fn rank(
        &self,
        catalog: &SourceCatalog,
        songs: &[Song],
        config: &ValidatedConfig,
    ) -> RankingOutcome {
        aggregator::rank_songs(catalog, songs, config)
    }
}
