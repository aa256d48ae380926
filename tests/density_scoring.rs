use density_core::config::{ConfigError, ScoreWeights};
use density_core::scoring::{compute_density, DensityScorer};
use density_core::types::{FeatureScores, PageIndex};

fn features(tfidf: f64, formulas: f64, definitions: f64, vocabulary: f64) -> FeatureScores {
    FeatureScores::new(tfidf, formulas, definitions, vocabulary)
}

#[test]
fn invariant_weighted_sum_on_synthetic_vectors() {
    assert!((compute_density(&features(1.0, 1.0, 1.0, 1.0)) - 1.0).abs() < 1e-12);
    assert!((compute_density(&features(0.0, 0.0, 0.0, 0.0)) - 0.0).abs() < 1e-12);
    assert!((compute_density(&features(1.0, 0.0, 0.0, 0.0)) - 0.60).abs() < 1e-12);
    assert!((compute_density(&features(0.0, 1.0, 0.0, 0.0)) - 0.15).abs() < 1e-12);
    assert!((compute_density(&features(0.0, 0.0, 1.0, 0.0)) - 0.15).abs() < 1e-12);
    assert!((compute_density(&features(0.0, 0.0, 0.0, 1.0)) - 0.10).abs() < 1e-12);
}

#[test]
fn invariant_weighted_sum_matches_formula() {
    let grid = [0.0, 0.1, 0.33, 0.5, 0.9, 1.0];
    for &t in &grid {
        for &f in &grid {
            for &d in &grid {
                for &v in &grid {
                    let expected = 0.60 * t + 0.15 * f + 0.15 * d + 0.10 * v;
                    let actual = compute_density(&features(t, f, d, v));
                    assert!((actual - expected).abs() < 1e-12);
                    assert!((0.0..=1.0).contains(&actual));
                }
            }
        }
    }
}

#[test]
fn scorer_uses_configured_weights() {
    let weights = ScoreWeights {
        tfidf: 0.25,
        formulas: 0.25,
        definitions: 0.25,
        vocabulary: 0.25,
    };
    let scorer = DensityScorer::new(weights).unwrap();
    let score = scorer.compute_density(&features(1.0, 0.0, 1.0, 0.0));
    assert!((score - 0.5).abs() < 1e-12);
}

#[test]
fn invariant_weights_must_sum_to_one() {
    let weights = ScoreWeights {
        tfidf: 0.50,
        formulas: 0.15,
        definitions: 0.15,
        vocabulary: 0.10,
    };
    let result = DensityScorer::new(weights);
    assert!(matches!(result, Err(ConfigError::InvalidWeights { .. })));
}

#[test]
fn invariant_weights_are_not_renormalized() {
    let weights = ScoreWeights {
        tfidf: 1.2,
        formulas: 0.15,
        definitions: -0.25,
        vocabulary: -0.10,
    };
    let result = DensityScorer::new(weights);
    assert!(matches!(result, Err(ConfigError::WeightOutOfRange { .. })));
}

#[test]
fn default_weights_are_valid() {
    let weights = ScoreWeights::default();
    assert!(weights.validate().is_ok());
    assert!((weights.sum() - 1.0).abs() < 1e-12);
}

#[test]
fn sanitize_clamps_and_zeroes_non_finite() {
    let raw = features(f64::NAN, 1.5, -0.2, f64::INFINITY);
    let clean = raw.sanitized(PageIndex::new(1));
    assert_eq!(clean, features(0.0, 1.0, 0.0, 0.0));
    assert!(clean.is_normalized());
}
