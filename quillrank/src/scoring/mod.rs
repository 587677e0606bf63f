//! Score computation for hybrid search results
//!
//! This module turns raw retrieval signals into one ranked order:
//! - [`freshness`] converts content dates into an exponential decay score
//! - [`normalize`] rescales heterogeneous raw scores into comparable ranges
//! - [`fusion`] combines the normalized components with configurable weights,
//!   redistributing weight when a signal is structurally unavailable
//!
//! # Example
//!
//! ```rust
//! use quillrank::config::SignalWeights;
//! use quillrank::models::{ArticleDoc, Candidate};
//! use quillrank::scoring::fuse_articles;
//!
//! let doc = ArticleDoc { id: "a-1".to_string(), ..Default::default() };
//! let candidates = vec![Candidate::from_text_hit(doc, 2.4, 1.6, 0.9)];
//! let ranked = fuse_articles(candidates, &SignalWeights::article_defaults());
//! assert!(ranked[0].final_score.is_some());
//! ```

pub mod freshness;
pub mod fusion;
pub mod normalize;

pub use freshness::FreshnessScorer;
pub use fusion::{fuse_articles, fuse_authors};
pub use normalize::{min_max, normalize};
