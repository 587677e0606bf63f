//! Configuration validation.

use super::models::QuillrankConfig;
use super::{ConfigError, Result};

/// Validate a complete configuration.
pub fn validate_config(config: &QuillrankConfig) -> Result<()> {
    config
        .article_weights
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("article_weights: {e}")))?;

    config
        .author_weights
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("author_weights: {e}")))?;

    if !config.freshness.half_life_days.is_finite() || config.freshness.half_life_days <= 0.0 {
        return Err(ConfigError::ValidationError(
            "freshness.half_life_days must be positive".to_string(),
        ));
    }

    let retrieval = &config.retrieval;
    for (name, factor) in [
        ("semantic_oversample", retrieval.semantic_oversample),
        ("simple_oversample", retrieval.simple_oversample),
        ("vector_oversample", retrieval.vector_oversample),
    ] {
        if !factor.is_finite() || factor < 1.0 {
            return Err(ConfigError::ValidationError(format!(
                "retrieval.{name} must be at least 1.0"
            )));
        }
    }

    if retrieval.backend_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "retrieval.backend_timeout_secs must be greater than 0".to_string(),
        ));
    }

    if retrieval.article_vector_field.is_empty() {
        return Err(ConfigError::ValidationError(
            "retrieval.article_vector_field must not be empty".to_string(),
        ));
    }

    if config.filtering.enabled && !config.filtering.threshold.is_finite() {
        return Err(ConfigError::ValidationError(
            "filtering.threshold must be finite".to_string(),
        ));
    }

    Ok(())
}
