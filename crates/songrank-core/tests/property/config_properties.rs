use proptest::prelude::*;
use songrank_core::config::{EngineConfig, RankBonus, RankingConfig, RankingMode};
use songrank_core::ConfigError;

fn arb_bonus() -> impl Strategy<Value = RankBonus> {
    (1.0f64..=1.2, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(rank1, a, b)| {
        let rank2 = 1.0 + (rank1 - 1.0) * a;
        let rank3 = 1.0 + (rank2 - 1.0) * b;
        RankBonus::from_array([rank1, rank2, rank3])
    })
}

prop_compose! {
    fn arb_config()(
        conviction in any::<bool>(),
        k_value in 0.0f64..=50.0,
        p_exponent in 0.0f64..=1.1,
        consensus_boost in 0.0f64..=0.2,
        provocation_boost in 0.0f64..=0.2,
        cluster_boost in 0.0f64..=0.2,
        cluster_threshold in 0.0f64..=100.0,
        min_sources in 1u32..=10,
        rank_cutoff in 0.0f64..=500.0,
        rank_bonus in arb_bonus(),
    ) -> RankingConfig {
        RankingConfig {
            mode: if conviction { RankingMode::Conviction } else { RankingMode::Consensus },
            k_value,
            p_exponent,
            consensus_boost,
            provocation_boost,
            cluster_boost,
            cluster_threshold,
            min_sources,
            rank_cutoff,
            rank_bonus,
        }
    }
}

// ── In-bounds configs always validate ────────────────────────────────────

proptest! {
    #[test]
    fn in_bounds_configs_validate(config in arb_config()) {
        prop_assert!(config.validate().is_ok());
    }
}

// ── Out-of-bounds boosts are rejected, never clamped ─────────────────────

proptest! {
    #[test]
    fn boost_above_bound_rejected(config in arb_config(), excess in 0.0001f64..10.0) {
        let config = RankingConfig { consensus_boost: 0.2 + excess, ..config };
        let is_out_of_bounds = matches!(
            config.validate(),
            Err(ConfigError::OutOfBounds { ref field, .. }) if field == "consensus_boost"
        );
        prop_assert!(is_out_of_bounds);
    }
}

// ── Fingerprint is a pure function of the parameters ─────────────────────

proptest! {
    #[test]
    fn fingerprint_tracks_parameters(config in arb_config()) {
        let a = config.clone().validated().unwrap();
        let b = config.clone().validated().unwrap();
        prop_assert_eq!(a.fingerprint(), b.fingerprint());

        let bumped = RankingConfig { min_sources: config.min_sources % 10 + 1, ..config }
            .validated()
            .unwrap();
        prop_assert_ne!(a.fingerprint(), bumped.fingerprint());
    }
}

// ── TOML round trip ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn toml_round_trip(config in arb_config()) {
        let engine = EngineConfig { ranking: config, ..EngineConfig::default() };
        let text = engine.to_toml().unwrap();
        let parsed = EngineConfig::from_toml(&text).unwrap();
        prop_assert_eq!(parsed, engine);
    }
}
