//! Property-based tests for the dice classifier
//!
//! Tests invariants:
//! - Legendary/mythical override ignores every other field
//! - Classification is deterministic
//! - Ranks never fall below the baseline except through single-stage normalization
//! - The pre-evolution correction is a single step
//! - Cache hits return the stored value

use std::sync::Arc;

use proptest::prelude::*;

use crate::core::dice_class::{
    ClassificationResult, CreatureProfile, CreatureStats, DiceClass, DiceClassifier,
};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Stats with occasionally missing numeric fields.
fn arb_stats() -> impl Strategy<Value = CreatureStats> {
    (
        prop::option::weighted(0.9, 0u32..800),
        prop::option::weighted(0.9, 0u32..4),
        prop::option::weighted(0.9, 0u32..3),
        prop::option::weighted(0.9, 0u32..80),
        prop::option::weighted(0.9, 0u32..80),
    )
        .prop_map(|(total, stage, remaining, first, second)| CreatureStats {
            base_stat_total: total,
            evolution_stage: stage,
            remaining_evolutions: remaining,
            first_evolution_level: first,
            second_evolution_level: second,
            ..Default::default()
        })
}

/// Stats for a form that has evolved at least once.
fn arb_evolved_stats() -> impl Strategy<Value = CreatureStats> {
    (arb_stats(), 1u32..4).prop_map(|(mut stats, stage)| {
        stats.evolution_stage = Some(stage);
        stats
    })
}

fn arb_profile() -> impl Strategy<Value = CreatureProfile> {
    (arb_stats(), prop::option::of(arb_stats())).prop_map(|(stats, pre)| CreatureProfile {
        stats,
        pre_evolution: pre,
    })
}

fn baseline_of(result: &ClassificationResult) -> DiceClass {
    let entry = &result.explanation[0];
    let notation = entry.rsplit(": ").next().unwrap_or_default();
    notation.parse().unwrap()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Legendary or mythical always yields 2d100 with a single entry
    #[test]
    fn prop_legendary_override(
        profile in arb_profile(),
        legendary in any::<bool>(),
    ) {
        let mut profile = profile;
        if legendary {
            profile.stats.is_legendary = true;
        } else {
            profile.stats.is_mythical = true;
        }

        let result = DiceClassifier::new().classify(&profile);
        prop_assert_eq!(result.dice_class, DiceClass::D2d100);
        prop_assert_eq!(result.explanation.len(), 1);
    }

    /// Property: Independent classifiers produce identical results
    #[test]
    fn prop_deterministic(profile in arb_profile()) {
        let first = DiceClassifier::new().classify(&profile);
        let second = DiceClassifier::new().classify(&profile);
        prop_assert_eq!(first, second);
    }

    /// Property: Without single-stage normalization, the result never drops
    /// below the stat baseline
    #[test]
    fn prop_rank_not_below_baseline(profile in arb_profile()) {
        let single_stage = profile.stats.evolution_stage == Some(0)
            && profile.stats.remaining_evolutions == Some(0);
        prop_assume!(!single_stage);

        let result = DiceClassifier::new().classify(&profile);
        prop_assert!(result.dice_class >= baseline_of(&result));
    }

    /// Property: Single-stage normalization moves at most one step toward 1d10
    #[test]
    fn prop_single_stage_moves_one_step(total in 0u32..800) {
        let result = DiceClassifier::new().classify(&CreatureStats::new(total).into_profile());
        let baseline = baseline_of(&result).rank() as i64;
        let target = DiceClass::D1d10.rank() as i64;
        let moved = result.rank() as i64 - baseline;

        prop_assert!(moved.abs() <= 1);
        prop_assert_eq!(moved, (target - baseline).signum());
    }

    /// Property: The pre-evolution comparison adds exactly one step when the
    /// creature does not outrank its pre-evolution, and nothing otherwise
    #[test]
    fn prop_pre_evolution_single_step(
        stats in arb_evolved_stats(),
        pre in arb_stats(),
    ) {
        let without = DiceClassifier::new().classify(&stats.clone().into_profile());
        let pre_result = DiceClassifier::new().classify(&pre.clone().into_profile());
        let with = DiceClassifier::new()
            .classify(&stats.into_profile().with_pre_evolution(pre));

        let expected = if without.rank() <= pre_result.rank() {
            (without.rank() + 1).min(DiceClass::MAX_RANK)
        } else {
            without.rank()
        };
        prop_assert_eq!(with.rank(), expected);
    }

    /// Property: A second call with the same id returns the cached value even
    /// when the stats differ
    #[test]
    fn prop_cache_returns_first_result(
        first in arb_profile(),
        second in arb_profile(),
    ) {
        let classifier = DiceClassifier::new();
        let mut first = first;
        let mut second = second;
        first.stats.id = Some("same-id".to_string());
        second.stats.id = Some("same-id".to_string());

        let a = classifier.classify(&first);
        let b = classifier.classify(&second);
        prop_assert!(Arc::ptr_eq(&a, &b));
    }
}
