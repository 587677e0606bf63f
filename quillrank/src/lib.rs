//! # Quillrank
//!
//! Hybrid search ranking engine for blog content: keyword (BM25), semantic
//! reranking, vector similarity, and content freshness fused into one ranked
//! list per entity type, with graceful degradation when any signal is
//! unavailable.
//!
//! The crate does not talk to any particular search product. Indexes,
//! embedding models, and LLMs are consumed through narrow trait interfaces
//! ([`backend::SearchIndex`], [`embedding::EmbeddingProvider`],
//! [`llm::LlmProvider`]); you bring implementations for whatever services
//! host your content.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use quillrank::prelude::*;
//!
//! # fn indexes() -> (Arc<dyn SearchIndex<Doc = ArticleDoc>>, Arc<dyn SearchIndex<Doc = AuthorDoc>>, Arc<dyn EmbeddingProvider>) { unimplemented!() }
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let (articles, authors, embedder) = indexes();
//!     let config = ConfigLoader::new().extract()?;
//!
//!     let service = HybridSearchService::new(articles, authors, embedder, None, config);
//!     service.probe_semantic().await;
//!
//!     let response = service.search_articles("rust async io", 10, None).await?;
//!     for hit in &response.results {
//!         println!("{}: {:.3}", hit.id, hit.score);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Ranking model
//!
//! Each candidate carries four raw signals: BM25, semantic reranker, vector
//! similarity, and a freshness decay score. Signals are min-max normalized
//! across the candidate set and combined with configurable weights; when the
//! semantic signal is structurally absent its weight is redistributed rather
//! than dropped. See [`scoring`] for the details.

pub mod backend;
pub mod config;
pub mod embedding;
pub mod llm;
pub mod logging;
pub mod matching;
pub mod models;
pub mod planner;
pub mod scoring;
pub mod search;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::backend::{
        BackendError, QueryMode, SearchIndex, TextHit, TextQuery, VectorHit, VectorQuery,
    };
    pub use crate::config::{
        ConfigLoader, LogFormat, LogLevel, QuillrankConfig, RetrievalConfig, SignalWeights,
    };
    pub use crate::embedding::{EmbeddingProvider, EmbeddingVector};
    pub use crate::llm::LlmProvider;
    pub use crate::matching::FuzzyNameMatcher;
    pub use crate::models::{
        ArticleDoc, AuthorDoc, BusinessDate, Candidate, CombinedSearchResponse, Document,
        PageInfo, SearchHit, SearchKind, SearchResponse, SignalScores,
    };
    pub use crate::planner::{QueryPlan, QueryPlanner, SearchParameters};
    pub use crate::scoring::{FreshnessScorer, fuse_articles, fuse_authors};
    pub use crate::search::{HybridSearchService, PageRequest};
    pub use crate::{QuillrankError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for quillrank operations
#[derive(Debug, thiserror::Error)]
pub enum QuillrankError {
    /// Error from a search backend
    #[error("Backend error: {0}")]
    Backend(#[from] crate::backend::BackendError),

    /// Error from the embedding provider
    #[error("Embedding error: {0}")]
    Embedding(#[from] crate::embedding::EmbeddingError),

    /// Error from the LLM provider
    #[error("LLM error: {0}")]
    Llm(#[from] crate::llm::LlmError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// A spawned retrieval task failed to complete
    #[error("Task error: {0}")]
    Task(String),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for QuillrankError {
    fn from(err: crate::config::ConfigError) -> Self {
        QuillrankError::Configuration(err.to_string())
    }
}

/// Result type for quillrank operations
pub type Result<T> = std::result::Result<T, QuillrankError>;
