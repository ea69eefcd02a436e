//! Classification of decoded JSON profiles.

use crate::core::dice_class::{CreatureProfile, DiceClass, DiceClassifier};

fn classify_json(json: &str) -> (DiceClass, Vec<String>) {
    let profile = CreatureProfile::from_json(json).unwrap();
    let result = DiceClassifier::new().classify(&profile);
    (result.dice_class, result.explanation.clone())
}

// ============================================================================
// Out-of-range numeric input
// ============================================================================

#[test]
fn test_null_stat_total_uses_top_baseline() {
    // null is treated as missing, not as zero
    let (class, explanation) = classify_json(r#"{"baseStatTotal": null}"#);
    assert_eq!(class, DiceClass::D2d6);
    assert_eq!(explanation, vec!["Base stat total unavailable: 2d6"]);
}

#[test]
fn test_negative_and_fractional_totals_use_top_baseline() {
    for raw in ["-5", "299.5", "\"300\"", "4294967296"] {
        let json = format!(r#"{{"baseStatTotal": {raw}}}"#);
        let (class, explanation) = classify_json(&json);
        assert_eq!(class, DiceClass::D2d6, "baseStatTotal {raw}");
        assert_eq!(explanation.len(), 1, "baseStatTotal {raw}");
    }
}

#[test]
fn test_null_stage_blocks_single_stage_rule() {
    let (class, explanation) = classify_json(
        r#"{"baseStatTotal": 250, "evolutionStage": null, "remainingEvolutions": 0}"#,
    );
    assert_eq!(class, DiceClass::D1d4);
    assert_eq!(explanation.len(), 1);
}

// ============================================================================
// Explanation trail
// ============================================================================

#[test]
fn test_explanation_follows_rule_order() {
    let (class, explanation) = classify_json(
        r#"{
            "id": "latebloomer",
            "baseStatTotal": 420,
            "evolutionStage": 2,
            "remainingEvolutions": 0,
            "firstEvolutionLevel": 44,
            "secondEvolutionLevel": 50,
            "preEvolution": {
                "name": "Earlybloomer",
                "isMythical": true
            }
        }"#,
    );

    assert_eq!(class, DiceClass::D2d10);
    assert_eq!(
        explanation,
        vec![
            "Base stat total 420: 1d8",
            "Evolved twice or more: +1 (1d8 -> 1d10)",
            "First evolution at level 44 (>= 32): +1 (1d10 -> 1d12)",
            "First evolution at level 44 (>= 42): +1 (1d12 -> 2d6)",
            "Evolution at level 50 or later: +1 (2d6 -> 2d8)",
            "Pre-evolution Earlybloomer is 2d100: +1 (2d8 -> 2d10)",
        ]
    );
}

#[test]
fn test_identical_input_gives_identical_trail() {
    let json = r#"{"baseStatTotal": 505, "evolutionStage": 1, "firstEvolutionLevel": 36}"#;
    assert_eq!(classify_json(json), classify_json(json));
}
