use proptest::prelude::*;
use songrank_core::catalog::{Song, SongEntry, Source, SourceCatalog};
use songrank_core::config::{RankBonus, RankingConfig, RankingMode};
use songrank_engine::rank_songs;

const SOURCE_NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
const CLUSTERS: [&str; 3] = ["Tastemakers", "Critical Authority", "Mainstream"];

fn catalog() -> SourceCatalog {
    let mut sources: Vec<Source> = SOURCE_NAMES[..5]
        .iter()
        .enumerate()
        .map(|(i, name)| Source::ranked(*name, 0.5 + 0.2 * i as f64, CLUSTERS[i % 3]))
        .collect();
    sources.push(Source::unranked(SOURCE_NAMES[5], 0.8, "Mainstream", 13.0));
    SourceCatalog::new(sources).unwrap()
}

fn arb_entry() -> impl Strategy<Value = SongEntry> {
    (0usize..SOURCE_NAMES.len(), 1u32..=100).prop_map(|(i, rank)| {
        if i == 5 {
            SongEntry::shadow(SOURCE_NAMES[5])
        } else {
            SongEntry::ranked(SOURCE_NAMES[i], f64::from(rank))
        }
    })
}

fn arb_songs() -> impl Strategy<Value = Vec<Song>> {
    prop::collection::vec(prop::collection::vec(arb_entry(), 1..5), 1..25).prop_map(|tables| {
        tables
            .into_iter()
            .enumerate()
            .map(|(i, entries)| Song {
                id: format!("s{i}"),
                title: format!("Title {}", i % 4),
                artist: format!("Artist {i}"),
                entries,
            })
            .collect()
    })
}

fn arb_config() -> impl Strategy<Value = RankingConfig> {
    (
        prop_oneof![Just(RankingMode::Consensus), Just(RankingMode::Conviction)],
        0.0f64..=50.0,
        0.0f64..=1.1,
        0.0f64..=0.2,
        0.0f64..=0.2,
        0.0f64..=0.2,
        1u32..=3,
        prop_oneof![Just(0.0f64), 5.0f64..=100.0],
    )
        .prop_map(
            |(mode, k_value, p_exponent, consensus_boost, provocation_boost, cluster_boost, min_sources, rank_cutoff)| {
                RankingConfig {
                    mode,
                    k_value,
                    p_exponent,
                    consensus_boost,
                    provocation_boost,
                    cluster_boost,
                    min_sources,
                    rank_cutoff,
                    rank_bonus: RankBonus::for_mode(mode),
                    ..RankingConfig::default()
                }
            },
        )
}

// ── Determinism ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn identical_inputs_identical_outcome(songs in arb_songs(), config in arb_config()) {
        let config = config.validated().unwrap();
        let catalog = catalog();
        let a = rank_songs(&catalog, &songs, &config);
        let b = rank_songs(&catalog, &songs, &config);
        prop_assert_eq!(a, b);
    }
}

// ── Normalization ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn top_song_normalizes_to_one(songs in arb_songs(), config in arb_config()) {
        let config = config.validated().unwrap();
        let outcome = rank_songs(&catalog(), &songs, &config);
        let max_raw = outcome.songs.iter().map(|s| s.raw_score()).fold(0.0, f64::max);
        if max_raw > 0.0 {
            // Ties below sort precision may put another song first.
            let top = outcome.top().unwrap();
            prop_assert!(top.normalized_score() > 1.0 - 1e-8);
            prop_assert!(outcome.songs.iter().any(|s| s.normalized_score() == 1.0));
        }
        for song in &outcome.songs {
            prop_assert!((0.0..=1.0).contains(&song.normalized_score()));
        }
    }
}

// ── Ranks and order ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ranks_are_contiguous_and_scores_non_increasing(songs in arb_songs(), config in arb_config()) {
        let config = config.validated().unwrap();
        let outcome = rank_songs(&catalog(), &songs, &config);
        for (i, song) in outcome.songs.iter().enumerate() {
            prop_assert_eq!(song.rank(), i + 1);
        }
        for pair in outcome.songs.windows(2) {
            let a = (pair[0].normalized_score() * 1e8).round();
            let b = (pair[1].normalized_score() * 1e8).round();
            prop_assert!(a >= b);
        }
    }
}

// ── Filters ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_song_is_ranked_or_excluded(songs in arb_songs(), config in arb_config()) {
        let config = config.validated().unwrap();
        let outcome = rank_songs(&catalog(), &songs, &config);
        let dropped = outcome.diagnostics.iter().filter(|d| d.drops_song()).count();
        prop_assert_eq!(outcome.total_count() + dropped, songs.len());

        for song in &outcome.songs {
            let b = &song.breakdown;
            prop_assert!(b.list_count >= config.min_sources as usize);
            prop_assert!(b.qualifying_count >= 1);
            prop_assert!(b.qualifying_count <= b.list_count);
            prop_assert_eq!(b.qualifying_count + b.excluded_entries.len(), b.list_count);
        }
        for excluded in &outcome.excluded {
            prop_assert!(!excluded.reasons.is_empty());
        }
    }
}

// ── Ranks above first place ──────────────────────────────────────────────

proptest! {
    #[test]
    fn ranks_below_one_are_dropped(rank in 0.0f64..1.0, config in arb_config()) {
        let config = config.validated().unwrap();
        let songs = vec![
            Song::new("low", "Low", "X").ranked_on("A", rank),
            Song::new("top", "Top", "Y").ranked_on("B", 1.0),
        ];
        let outcome = rank_songs(&catalog(), &songs, &config);
        prop_assert_eq!(outcome.diagnostics.len(), 1);
        prop_assert!(outcome.get("low").is_none());
        for song in &outcome.songs {
            prop_assert!(song.breakdown.min_effective_rank >= 1.0);
        }
    }
}

// ── Multipliers ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn multipliers_never_penalize(songs in arb_songs(), config in arb_config()) {
        let config = config.validated().unwrap();
        let outcome = rank_songs(&catalog(), &songs, &config);
        for song in &outcome.songs {
            let b = &song.breakdown;
            prop_assert!(b.consensus_mul >= 1.0);
            prop_assert!(b.consensus_mul <= 1.0 + config.consensus_boost + 1e-12);
            prop_assert!(b.provocation_mul >= 1.0);
            prop_assert!(b.diversity_mul >= 1.0);
            prop_assert!(b.raw_score >= b.base_score - 1e-12);
        }
    }
}
