//! Configuration model definitions.
//!
//! Defaults here are the tuned production values; deployments override the
//! ones they need through a config file or `QUILLRANK_`-prefixed environment
//! variables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for quillrank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuillrankConfig {
    /// Fusion weights for article searches
    pub article_weights: SignalWeights,

    /// Fusion weights for author searches
    #[serde(default = "SignalWeights::author_defaults")]
    pub author_weights: SignalWeights,

    /// Freshness decay configuration
    pub freshness: FreshnessConfig,

    /// Retrieval depth and timeout configuration
    pub retrieval: RetrievalConfig,

    /// Post-fusion score filtering
    pub filtering: ScoreFilterConfig,

    /// Query planner configuration
    pub planner: PlannerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for QuillrankConfig {
    fn default() -> Self {
        Self {
            article_weights: SignalWeights::article_defaults(),
            author_weights: SignalWeights::author_defaults(),
            freshness: FreshnessConfig::default(),
            retrieval: RetrievalConfig::default(),
            filtering: ScoreFilterConfig::default(),
            planner: PlannerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Relative weights of the fused relevance signals.
///
/// Weights are expected to sum to 1.0 so final scores stay comparable across
/// queries; validation enforces this within a small tolerance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SignalWeights {
    pub semantic: f64,
    pub bm25: f64,
    pub vector: f64,
    pub business: f64,
}

impl SignalWeights {
    /// Tuned weights for article searches
    pub fn article_defaults() -> Self {
        Self {
            semantic: 0.5,
            bm25: 0.3,
            vector: 0.1,
            business: 0.1,
        }
    }

    /// Tuned weights for author searches; authors have no vector field and
    /// no content date
    pub fn author_defaults() -> Self {
        Self {
            semantic: 0.6,
            bm25: 0.4,
            vector: 0.0,
            business: 0.0,
        }
    }

    /// Validate the weights, returning an error message if invalid
    pub fn validate(&self) -> Result<(), String> {
        let components = [self.semantic, self.bm25, self.vector, self.business];
        if components.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err("weights must be finite and non-negative".to_string());
        }
        let sum: f64 = components.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(format!("weights must sum to 1.0, got {sum}"));
        }
        Ok(())
    }
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self::article_defaults()
    }
}

/// Freshness decay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FreshnessConfig {
    /// Days after which a document's freshness score halves
    pub half_life_days: f64,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            half_life_days: 250.0,
        }
    }
}

/// Retrieval depth, oversampling, and timeout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Oversampling factor for semantic text retrieval
    pub semantic_oversample: f64,

    /// Oversampling factor for simple text retrieval; higher because there
    /// is no reranker to recover from a shallow candidate pool
    pub simple_oversample: f64,

    /// Oversampling factor for vector retrieval
    pub vector_oversample: f64,

    /// Minimum candidate pool for paginated article searches
    pub article_page_floor: usize,

    /// Minimum candidate pool for paginated author searches
    pub author_page_floor: usize,

    /// Vector field searched on the articles index
    pub article_vector_field: String,

    /// Deadline for each backend call, in seconds
    pub backend_timeout_secs: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            semantic_oversample: 1.1,
            simple_oversample: 1.3,
            vector_oversample: 1.2,
            article_page_floor: 200,
            author_page_floor: 100,
            article_vector_field: "abstract_vector".to_string(),
            backend_timeout_secs: 30,
        }
    }
}

/// Post-fusion score filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreFilterConfig {
    /// Whether to drop results below the threshold
    pub enabled: bool,

    /// Minimum final score to keep; ignored unless positive
    pub threshold: f64,
}

impl Default for ScoreFilterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: 0.0,
        }
    }
}

/// Query planner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Combined search only invokes the planner for queries with at least
    /// this many words; short queries rarely benefit
    pub min_query_words: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { min_query_words: 5 }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}
