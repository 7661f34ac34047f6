//! Span definitions per ranking stage: rank, resolve, filter, score.

/// Span around one full ranking computation.
#[macro_export]
macro_rules! rank_span {
    ($mode:expr, $song_count:expr, $source_count:expr) => {
        tracing::info_span!(
            "songrank.rank",
            mode = %$mode,
            songs = $song_count,
            sources = $source_count
        )
    };
}

/// Span around resolving song entries against the catalog.
#[macro_export]
macro_rules! resolve_span {
    ($song_count:expr) => {
        tracing::debug_span!("songrank.resolve", songs = $song_count)
    };
}

/// Span around the eligibility filters.
#[macro_export]
macro_rules! filter_span {
    ($min_sources:expr, $rank_cutoff:expr) => {
        tracing::debug_span!(
            "songrank.filter",
            min_sources = $min_sources,
            rank_cutoff = $rank_cutoff
        )
    };
}

/// Span around scoring, normalization and ordering of the eligible set.
#[macro_export]
macro_rules! score_span {
    ($eligible:expr, $max_list_count:expr) => {
        tracing::debug_span!(
            "songrank.score",
            eligible = $eligible,
            max_list_count = $max_list_count
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RANK: &str = "songrank.rank";
    pub const RESOLVE: &str = "songrank.resolve";
    pub const FILTER: &str = "songrank.filter";
    pub const SCORE: &str = "songrank.score";
}
