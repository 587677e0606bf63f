//! Score-bearing candidates and the response shapes built from them

use serde::{Deserialize, Serialize};
use std::fmt;

use super::document::Document;

/// The entity type a search operates over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Articles,
    Authors,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Articles => write!(f, "articles"),
            Self::Authors => write!(f, "authors"),
        }
    }
}

/// Raw relevance components for one candidate
///
/// Each component defaults to 0.0 when its signal did not fire for this
/// candidate (e.g. a document found only by the vector path has no BM25
/// score).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalScores {
    /// Keyword relevance from the text index
    pub bm25: f64,

    /// Secondary reranker score when semantic mode was used
    pub semantic: f64,

    /// Vector similarity from the KNN path
    pub vector: f64,

    /// Freshness decay score in [0, 1]
    pub business: f64,
}

/// One merged retrieval result, before and after fusion
///
/// A candidate's `id` is unique within one search operation: when the text
/// and vector paths both find a document, their components are accumulated
/// onto a single candidate rather than duplicated.
#[derive(Debug, Clone)]
pub struct Candidate<D> {
    /// The underlying document identifier
    pub id: String,

    /// The retrieved payload; `None` until back-filled for paths that only
    /// return id + score
    pub doc: Option<D>,

    /// Raw score components accumulated from the retrieval paths
    pub scores: SignalScores,

    /// Fused score, assigned by the fusion engine
    pub final_score: Option<f64>,
}

impl<D: Document> Candidate<D> {
    /// Build a candidate from a text-path hit
    pub fn from_text_hit(doc: D, bm25: f64, semantic: f64, business: f64) -> Self {
        Self {
            id: doc.id().to_string(),
            doc: Some(doc),
            scores: SignalScores {
                bm25,
                semantic,
                vector: 0.0,
                business,
            },
            final_score: None,
        }
    }

    /// Build a candidate from a vector-path hit (payload may be absent)
    pub fn from_vector_hit(id: String, doc: Option<D>, vector: f64, business: f64) -> Self {
        Self {
            id,
            doc,
            scores: SignalScores {
                bm25: 0.0,
                semantic: 0.0,
                vector,
                business,
            },
            final_score: None,
        }
    }

    /// Build a candidate from a fuzzy-match score, carried on the BM25 slot
    pub fn from_match_score(doc: D, score: f64) -> Self {
        Self::from_text_hit(doc, score, 0.0, 0.0)
    }

    /// The fused score, or 0.0 when fusion has not run yet
    pub fn final_or_zero(&self) -> f64 {
        self.final_score.unwrap_or(0.0)
    }
}

/// One ranked result in a search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<D> {
    pub id: String,
    pub doc: Option<D>,
    pub scores: SignalScores,
    /// The fused final score this hit was ranked by
    pub score: f64,
}

impl<D: Document> From<Candidate<D>> for SearchHit<D> {
    fn from(candidate: Candidate<D>) -> Self {
        let score = candidate.final_or_zero();
        Self {
            id: candidate.id,
            doc: candidate.doc,
            scores: candidate.scores,
            score,
        }
    }
}

/// Pagination metadata for a paged search response
///
/// Totals are computed over the entire fused result set, so two pages of the
/// same query report the same `total_results` and `total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page_index: usize,
    pub page_size: usize,
    pub total_results: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// The ranked, paginated outcome of one search call for one entity type
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<D> {
    pub results: Vec<SearchHit<D>>,
    pub normalized_query: String,
    pub pagination: Option<PageInfo>,
    pub search_type: SearchKind,
}

impl<D> SearchResponse<D> {
    /// An empty response, used when one side of a combined search fails
    pub fn empty(normalized_query: impl Into<String>, search_type: SearchKind) -> Self {
        Self {
            results: Vec::new(),
            normalized_query: normalized_query.into(),
            pagination: None,
            search_type,
        }
    }
}

/// Both entity types searched with one query
#[derive(Debug, Clone, Serialize)]
pub struct CombinedSearchResponse {
    pub articles: SearchResponse<super::ArticleDoc>,
    pub authors: SearchResponse<super::AuthorDoc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleDoc;

    #[test]
    fn text_hit_candidate_carries_doc_and_scores() {
        let doc = ArticleDoc {
            id: "a-1".to_string(),
            ..Default::default()
        };
        let candidate = Candidate::from_text_hit(doc, 2.5, 1.1, 0.8);
        assert_eq!(candidate.id, "a-1");
        assert!(candidate.doc.is_some());
        assert_eq!(candidate.scores.bm25, 2.5);
        assert_eq!(candidate.scores.semantic, 1.1);
        assert_eq!(candidate.scores.vector, 0.0);
        assert!(candidate.final_score.is_none());
    }

    #[test]
    fn vector_hit_candidate_defaults_other_components() {
        let candidate: Candidate<ArticleDoc> =
            Candidate::from_vector_hit("a-2".to_string(), None, 0.77, 0.0);
        assert_eq!(candidate.scores.bm25, 0.0);
        assert_eq!(candidate.scores.semantic, 0.0);
        assert_eq!(candidate.scores.vector, 0.77);
        assert!(candidate.doc.is_none());
    }

    #[test]
    fn search_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SearchKind::Articles).unwrap(),
            "\"articles\""
        );
        assert_eq!(SearchKind::Authors.to_string(), "authors");
    }
}
