//! The index trait the orchestrator is written against

use async_trait::async_trait;

use crate::models::Document;

use super::BackendError;
use super::types::{TextHit, TextQuery, VectorHit, VectorQuery};

/// One searchable index of a single document type.
///
/// Implementations wrap a concrete search service; the orchestrator only
/// depends on this trait. All methods take `&self` and implementations are
/// expected to be cheaply shareable behind an `Arc`.
#[async_trait]
pub trait SearchIndex: Send + Sync + 'static {
    type Doc: Document;

    /// Execute a text query (semantic or simple per the query's mode)
    async fn text_search(&self, query: &TextQuery) -> Result<Vec<TextHit<Self::Doc>>, BackendError>;

    /// Execute a KNN query against a vector field
    async fn vector_search(
        &self,
        query: &VectorQuery,
    ) -> Result<Vec<VectorHit<Self::Doc>>, BackendError>;

    /// Fetch full documents for a batch of ids in one round trip
    async fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<Self::Doc>, BackendError>;

    /// Fetch a single document by id
    async fn get_document(&self, id: &str) -> Result<Self::Doc, BackendError>;

    /// Retrieve every document in the index.
    ///
    /// Only small indexes (the author list) support this cheaply; article
    /// backends may refuse it.
    async fn list_all(&self) -> Result<Vec<Self::Doc>, BackendError>;
}
