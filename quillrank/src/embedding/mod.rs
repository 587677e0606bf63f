//! Embedding provider interface for the vector retrieval path
//!
//! The orchestrator never computes embeddings itself; it asks a provider to
//! turn the query text into a vector and hands that to the backend's KNN
//! search. Providers are expected to be deployed alongside whatever model
//! produced the document vectors in the index.

use async_trait::async_trait;
use thiserror::Error;

/// Type for embedding vectors
pub type EmbeddingVector = Vec<f32>;

/// Errors from embedding providers
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// The provider could not be reached
    #[error("embedding provider unreachable: {0}")]
    Connection(String),

    /// The provider rejected the input (too long, empty, wrong language)
    #[error("embedding request rejected: {0}")]
    InvalidInput(String),

    /// The provider returned a vector of an unexpected dimension
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Anything else the provider reports
    #[error("embedding error: {0}")]
    Other(String),
}

/// Interface for services that turn query text into vectors
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + 'static {
    /// The dimension of the vectors this provider produces
    fn dimension(&self) -> usize;

    /// Generate an embedding for a single text
    async fn embed(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError>;
}
