//! Configuration system for quillrank.
//!
//! Configuration merges defaults, an optional config file, and environment
//! variables, in that order of increasing precedence.

mod loader;
mod models;
#[cfg(test)]
mod tests;
mod validation;

pub use loader::ConfigLoader;
pub use models::*;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "quillrank.toml",
    "quillrank.yaml",
    "quillrank.yml",
    "quillrank.json",
    ".quillrank/config.toml",
    ".quillrank/config.yaml",
    ".quillrank/config.yml",
    ".quillrank/config.json",
];

/// Environment variable prefix for quillrank configuration
pub const ENV_PREFIX: &str = "QUILLRANK_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
