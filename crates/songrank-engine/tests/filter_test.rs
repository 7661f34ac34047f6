//! The two eligibility predicates are independent of each other.

use songrank_core::catalog::{Song, Source, SourceCatalog};
use songrank_core::config::RankingConfig;
use songrank_core::models::ExclusionReason;
use songrank_engine::filter::{exclusion_reasons, passes_min_sources, passes_rank_cutoff};
use songrank_engine::resolve::resolve;

fn catalog() -> SourceCatalog {
    SourceCatalog::new(vec![
        Source::ranked("A", 1.0, "Tastemakers"),
        Source::ranked("B", 1.0, "Tastemakers"),
        Source::ranked("C", 1.0, "Mainstream"),
        Source::unranked("D", 1.0, "Critical Authority", 75.5),
    ])
    .unwrap()
}

#[test]
fn min_sources_ignores_the_cutoff() {
    let catalog = catalog();
    let songs = vec![Song::new("s", "T", "A")
        .ranked_on("A", 5.0)
        .ranked_on("B", 40.0)
        .ranked_on("C", 60.0)];
    let resolution = resolve(&catalog, &songs);
    let song = &resolution.songs[0];

    assert!(passes_min_sources(song, 3));
    assert!(passes_rank_cutoff(song, Some(10.0)));
    let config = RankingConfig {
        min_sources: 3,
        rank_cutoff: 10.0,
        ..RankingConfig::default()
    };
    assert!(exclusion_reasons(song, &config).is_empty());
}

#[test]
fn cutoff_fails_alone() {
    let catalog = catalog();
    let songs = vec![Song::new("s", "T", "A")
        .ranked_on("A", 15.0)
        .listed_on("D")];
    let resolution = resolve(&catalog, &songs);
    let song = &resolution.songs[0];

    let config = RankingConfig {
        min_sources: 2,
        rank_cutoff: 10.0,
        ..RankingConfig::default()
    };
    assert_eq!(
        exclusion_reasons(song, &config),
        vec![ExclusionReason::NoQualifyingEntries {
            list_count: 2,
            rank_cutoff: 10.0
        }]
    );
}

#[test]
fn shadow_rank_counts_against_the_cutoff() {
    let catalog = catalog();
    let songs = vec![Song::new("s", "T", "A").listed_on("D")];
    let resolution = resolve(&catalog, &songs);
    let song = &resolution.songs[0];

    assert!(!passes_rank_cutoff(song, Some(75.0)));
    assert!(passes_rank_cutoff(song, Some(75.5)));
    assert!(passes_rank_cutoff(song, None));
}

#[test]
fn song_without_usable_entries_fails_both() {
    let catalog = catalog();
    let songs = vec![Song::new("s", "T", "A").ranked_on("Nowhere", 1.0)];
    let resolution = resolve(&catalog, &songs);
    let song = &resolution.songs[0];

    assert_eq!(song.list_count(), 0);
    assert_eq!(exclusion_reasons(song, &RankingConfig::default()).len(), 2);
}
