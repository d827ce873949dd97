//! End-to-end pipeline tests against toy parameters with hand-computed
//! expected values: assemble → standardize → classify through the public
//! `RiskScorer` entry point.

use diabetes_risk_core::{
    LogisticModel, ModelArtifacts, RiskFactors, RiskLabel, RiskScorer, StandardScaler,
    FEATURE_COUNT,
};

/// Toy parameters: identity scaler, uniform 0.1 weights, -0.5 intercept.
fn toy_scorer() -> RiskScorer {
    RiskScorer::new(ModelArtifacts::from_parts(
        StandardScaler::new([0.0; FEATURE_COUNT], [1.0; FEATURE_COUNT]),
        LogisticModel::new([0.1; FEATURE_COUNT], -0.5),
    ))
}

fn typical_patient() -> RiskFactors {
    RiskFactors::from_ordered([1.0, 120.0, 70.0, 20.0, 80.0, 25.0, 0.5, 30.0])
}

#[test]
fn test_saturating_logit_predicts_positive() {
    // logit = -0.5 + 0.1 * (1 + 120 + 70 + 20 + 80 + 25 + 0.5 + 30) = 34.15
    let prediction = toy_scorer().predict(&typical_patient()).unwrap();

    assert!(prediction.probability > 0.999_999_999);
    assert!(prediction.probability <= 1.0);
    assert_eq!(prediction.label, RiskLabel::Positive);
}

#[test]
fn test_all_zero_input_predicts_negative() {
    // logit = -0.5, probability = 1 / (1 + e^0.5) ≈ 0.3775
    let factors = RiskFactors::from_ordered([0.0; FEATURE_COUNT]);
    let prediction = toy_scorer().predict(&factors).unwrap();

    assert!((prediction.probability - 0.3775).abs() < 1e-4);
    assert_eq!(prediction.label, RiskLabel::Negative);
}

#[test]
fn test_exact_boundary_resolves_to_positive() {
    // Zero weights and intercept force logit == 0, probability == 0.5.
    let scorer = RiskScorer::new(ModelArtifacts::from_parts(
        StandardScaler::new([0.0; FEATURE_COUNT], [1.0; FEATURE_COUNT]),
        LogisticModel::new([0.0; FEATURE_COUNT], 0.0),
    ));

    let prediction = scorer.predict(&typical_patient()).unwrap();
    assert_eq!(prediction.probability, 0.5);
    assert_eq!(prediction.label, RiskLabel::Positive);
}

#[test]
fn test_prediction_is_bit_identical_across_calls() {
    let scorer = toy_scorer();
    let factors = typical_patient();

    let first = scorer.predict(&factors).unwrap();
    let second = scorer.predict(&factors).unwrap();

    assert_eq!(first.probability.to_bits(), second.probability.to_bits());
    assert_eq!(first.label, second.label);
}

#[test]
fn test_probability_stays_in_unit_interval_for_extreme_inputs() {
    let scorer = toy_scorer();
    for magnitude in [0.0, 1.0, 1e3, 1e6, 1e9, -1e9] {
        let factors = RiskFactors::from_ordered([magnitude; FEATURE_COUNT]);
        let prediction = scorer.predict(&factors).unwrap();

        assert!(!prediction.probability.is_nan());
        assert!((0.0..=1.0).contains(&prediction.probability));
        assert_eq!(
            prediction.label.is_positive(),
            prediction.probability >= 0.5
        );
    }
}

#[test]
fn test_probability_is_monotone_in_glucose() {
    // With a positive glucose weight and positive scale, raising glucose
    // alone must never lower the probability.
    let scorer = RiskScorer::new(ModelArtifacts::from_parts(
        StandardScaler::new([120.0; FEATURE_COUNT], [30.0; FEATURE_COUNT]),
        LogisticModel::new([0.0, 1.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], -0.8),
    ));

    let mut previous = -1.0;
    for glucose in [60.0, 90.0, 120.0, 150.0, 200.0] {
        let factors = RiskFactors::from_ordered([3.0, glucose, 70.0, 20.0, 80.0, 30.0, 0.4, 35.0]);
        let prediction = scorer.predict(&factors).unwrap();
        assert!(
            prediction.probability > previous,
            "probability dropped at glucose {glucose}"
        );
        previous = prediction.probability;
    }
}

#[test]
fn test_degenerate_scale_fails_through_the_pipeline() {
    let mut scale = [1.0; FEATURE_COUNT];
    scale[1] = 0.0;
    let scorer = RiskScorer::new(ModelArtifacts::from_parts(
        StandardScaler::new([0.0; FEATURE_COUNT], scale),
        LogisticModel::new([0.1; FEATURE_COUNT], -0.5),
    ));

    let err = scorer.predict(&typical_patient()).unwrap_err();
    assert!(!err.is_input_error());
    assert!(err.to_string().contains("glucose"));
}

#[test]
fn test_standardization_changes_the_decision() {
    // Same raw input, same weights; only the scaler differs. Confirms the
    // transform actually participates in the score rather than passing
    // values through.
    let raw = RiskFactors::from_ordered([1.0, 100.0, 70.0, 20.0, 80.0, 25.0, 0.5, 30.0]);

    let identity = toy_scorer().predict(&raw).unwrap();

    let centered = RiskScorer::new(ModelArtifacts::from_parts(
        StandardScaler::new(
            [3.8, 120.9, 69.1, 20.5, 79.8, 32.0, 0.47, 33.2],
            [3.4, 32.0, 19.4, 16.0, 115.2, 7.9, 0.33, 11.8],
        ),
        LogisticModel::new([0.1; FEATURE_COUNT], -0.5),
    ))
    .predict(&raw)
    .unwrap();

    assert_ne!(
        identity.probability.to_bits(),
        centered.probability.to_bits()
    );
}
