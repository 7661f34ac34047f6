use proptest::prelude::*;
use songrank_core::config::{RankBonus, RankingConfig, RankingMode};
use songrank_core::constants::MIN_RANK;
use songrank_core::traits::IDecayFunction;
use songrank_decay::DecayEngine;

fn arb_mode() -> impl Strategy<Value = RankingMode> {
    prop_oneof![Just(RankingMode::Consensus), Just(RankingMode::Conviction)]
}

fn arb_bonus() -> impl Strategy<Value = RankBonus> {
    (1.0f64..=1.2, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(rank1, a, b)| {
        let rank2 = 1.0 + (rank1 - 1.0) * a;
        let rank3 = 1.0 + (rank2 - 1.0) * b;
        RankBonus::from_array([rank1, rank2, rank3])
    })
}

fn arb_config() -> impl Strategy<Value = RankingConfig> {
    (arb_mode(), 0.0f64..=50.0, 0.0f64..=1.1, arb_bonus()).prop_map(
        |(mode, k_value, p_exponent, rank_bonus)| RankingConfig {
            mode,
            k_value,
            p_exponent,
            rank_bonus,
            ..RankingConfig::default()
        },
    )
}

// ── Monotonically non-increasing ─────────────────────────────────────────

proptest! {
    #[test]
    fn monotonically_non_increasing(
        config in arb_config(),
        r1 in prop_oneof![Just(MIN_RANK), MIN_RANK..200.0],
        delta in 0.0f64..200.0,
    ) {
        let engine = DecayEngine::from_config(&config);
        let r2 = r1 + delta;
        prop_assert!(engine.value(r1) >= engine.value(r2) - 1e-12);
    }
}

// ── First place is the maximum of the domain ─────────────────────────────

proptest! {
    #[test]
    fn first_place_is_the_maximum(config in arb_config(), rank in MIN_RANK..500.0) {
        let engine = DecayEngine::from_config(&config);
        prop_assert!(engine.value(MIN_RANK) >= engine.value(rank) - 1e-12);
    }
}

// ── Non-negative and bounded by the top bonus ────────────────────────────

proptest! {
    #[test]
    fn bounded(config in arb_config(), rank in MIN_RANK..500.0) {
        let engine = DecayEngine::from_config(&config);
        let value = engine.value(rank);
        prop_assert!(value >= 0.0);
        prop_assert!(value <= config.rank_bonus.rank1 + 1e-12);
    }
}

// ── Rank one before bonus is exactly one ─────────────────────────────────

proptest! {
    #[test]
    fn rank_one_curve_is_unity(config in arb_config()) {
        let engine = DecayEngine::from_config(&config);
        let breakdown = engine.breakdown(1.0);
        prop_assert!((breakdown.curve - 1.0).abs() < 1e-12);
        prop_assert_eq!(breakdown.bonus, config.rank_bonus.rank1);
    }
}

// ── Bonus only on floor 1..=3 ────────────────────────────────────────────

proptest! {
    #[test]
    fn no_bonus_from_rank_four(config in arb_config(), rank in 4.0f64..500.0) {
        let engine = DecayEngine::from_config(&config);
        prop_assert_eq!(engine.breakdown(rank).bonus, 1.0);
    }
}
