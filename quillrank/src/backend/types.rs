//! Request and hit types exchanged with a search backend

use serde::{Deserialize, Serialize};

/// How the text path should execute a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Full-text retrieval followed by the index's secondary reranker
    Semantic,

    /// Plain full-text retrieval, no reranker
    Simple,
}

/// A text-path search request
#[derive(Debug, Clone)]
pub struct TextQuery {
    pub query: String,
    pub mode: QueryMode,

    /// How many hits to retrieve
    pub top: usize,

    /// Backend filter expression, when the planner produced one
    pub filter: Option<String>,

    /// Explicit sort expressions, override relevance order
    pub order_by: Vec<String>,

    /// Restrict matching to these fields
    pub search_fields: Vec<String>,

    /// Comma-separated fields to highlight in results
    pub highlight_fields: Option<String>,
}

impl TextQuery {
    pub fn new(query: impl Into<String>, mode: QueryMode, top: usize) -> Self {
        Self {
            query: query.into(),
            mode,
            top,
            filter: None,
            order_by: Vec::new(),
            search_fields: Vec::new(),
            highlight_fields: None,
        }
    }

    /// The same query downgraded to simple mode
    pub fn as_simple(&self) -> Self {
        Self {
            mode: QueryMode::Simple,
            ..self.clone()
        }
    }
}

/// A vector-path (KNN) search request
#[derive(Debug, Clone)]
pub struct VectorQuery {
    pub embedding: Vec<f32>,

    /// The vector field to search against
    pub field: String,

    /// How many nearest neighbors to retrieve
    pub top: usize,

    /// Backend filter expression, applied before KNN
    pub filter: Option<String>,

    /// Explicit sort expressions, kept aligned with the text path
    pub order_by: Vec<String>,
}

/// One hit from the text path
#[derive(Debug, Clone)]
pub struct TextHit<D> {
    pub doc: D,

    /// BM25 relevance score
    pub score: f64,

    /// Secondary reranker score, present only in semantic mode
    pub reranker_score: Option<f64>,
}

/// One hit from the vector path. Backends may return only id + score.
#[derive(Debug, Clone)]
pub struct VectorHit<D> {
    pub id: String,
    pub doc: Option<D>,
    pub score: f64,
}
