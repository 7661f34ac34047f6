use crate::catalog::{Song, SourceCatalog};
use crate::config::ValidatedConfig;
use crate::models::RankingOutcome;

/// Consensus ranking over a song table.
///
/// Implementations are pure: the same inputs always produce the same
/// outcome, and nothing from a previous call is reused.
pub trait IRankingEngine: Send + Sync {
    fn rank(
        &self,
        catalog: &SourceCatalog,
        songs: &[Song],
        config: &ValidatedConfig,
    ) -> RankingOutcome;
}
