//! Search backend abstraction
//!
//! The ranking pipeline talks to its indexes through the [`SearchIndex`]
//! trait so the orchestrator can be tested against in-memory fakes and
//! deployed against whatever search service hosts the content. Errors
//! distinguish capability rejections (semantic features not provisioned on
//! the index) from transient faults, because the orchestrator downgrades and
//! retries the former but fails the latter.

pub mod traits;
pub mod types;

pub use traits::SearchIndex;
pub use types::{QueryMode, TextHit, TextQuery, VectorHit, VectorQuery};

use thiserror::Error;

/// Errors surfaced by search backend implementations
#[derive(Error, Debug)]
pub enum BackendError {
    /// The index rejected a semantic query because the capability is not
    /// provisioned. The orchestrator treats this as a signal to downgrade.
    #[error("semantic search not available: {0}")]
    SemanticNotAvailable(String),

    /// The index rejected the query itself (bad filter syntax, unknown field)
    #[error("query rejected by backend: {0}")]
    Query(String),

    /// The backend could not be reached
    #[error("backend connection failed: {0}")]
    Connection(String),

    /// The backend did not answer within the configured deadline
    #[error("backend call timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// A requested document does not exist
    #[error("document not found: {0}")]
    NotFound(String),

    /// A backend payload could not be decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Anything else the backend reports
    #[error("backend error: {0}")]
    Other(String),
}

impl BackendError {
    /// Whether this error means the index lacks semantic capability, as
    /// opposed to a transient or query-specific fault
    pub fn is_capability_rejection(&self) -> bool {
        matches!(self, Self::SemanticNotAvailable(_))
    }
}
