//! Configuration system tests.

use super::*;
use figment::providers::Serialized;

#[test]
fn default_config_is_valid() {
    let config = ConfigLoader::new().extract().expect("defaults must load");
    assert_eq!(config.article_weights, SignalWeights::article_defaults());
    assert_eq!(config.author_weights, SignalWeights::author_defaults());
    assert_eq!(config.freshness.half_life_days, 250.0);
    assert_eq!(config.retrieval.article_page_floor, 200);
    assert_eq!(config.retrieval.author_page_floor, 100);
    assert!(!config.filtering.enabled);
    assert_eq!(config.planner.min_query_words, 5);
}

#[test]
fn default_weights_sum_to_one() {
    assert!(SignalWeights::article_defaults().validate().is_ok());
    assert!(SignalWeights::author_defaults().validate().is_ok());
}

#[test]
fn unbalanced_weights_are_rejected() {
    let weights = SignalWeights {
        semantic: 0.9,
        bm25: 0.9,
        vector: 0.0,
        business: 0.0,
    };
    assert!(weights.validate().is_err());
}

#[test]
fn negative_weights_are_rejected() {
    let weights = SignalWeights {
        semantic: 1.2,
        bm25: -0.2,
        vector: 0.0,
        business: 0.0,
    };
    assert!(weights.validate().is_err());
}

#[test]
fn merged_overrides_take_precedence() {
    let mut loader = ConfigLoader::new();
    loader.merge(Serialized::defaults(serde_json::json!({
        "freshness": {"half_life_days": 90.0},
        "filtering": {"enabled": true, "threshold": 0.4}
    })));
    let config = loader.extract().expect("override must load");
    assert_eq!(config.freshness.half_life_days, 90.0);
    assert!(config.filtering.enabled);
    assert_eq!(config.filtering.threshold, 0.4);
}

#[test]
fn invalid_override_fails_validation() {
    let mut loader = ConfigLoader::new();
    loader.merge(Serialized::defaults(serde_json::json!({
        "freshness": {"half_life_days": 0.0}
    })));
    let err = loader.extract().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
fn oversample_below_one_fails_validation() {
    let mut loader = ConfigLoader::new();
    loader.merge(Serialized::defaults(serde_json::json!({
        "retrieval": {"simple_oversample": 0.5}
    })));
    assert!(loader.extract().is_err());
}

#[test]
fn log_level_parses_from_str() {
    use std::str::FromStr;
    assert_eq!(LogLevel::from_str("INFO").unwrap(), LogLevel::Info);
    assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
    assert!(LogLevel::from_str("loud").is_err());
}
