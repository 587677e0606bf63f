//! Weighted fusion of normalized relevance signals
//!
//! Fusion assigns each candidate one final score:
//!
//! `final = w_sem * sem' + w_bm25 * bm25' + w_vec * vec' + w_bus * business`
//!
//! where primed components are normalized across the candidate set and the
//! business (freshness) component is already in [0, 1] and used raw. When no
//! candidate carries a positive semantic score the reranker did not run for
//! this query, and its weight is redistributed rather than silently dropped:
//! articles shift it onto the vector signal, authors shift it onto keyword
//! relevance (and scale keyword scores by the set maximum so the strongest
//! match keeps a full score instead of being min-maxed to a spread).

use tracing::debug;

use crate::config::SignalWeights;
use crate::models::{Candidate, Document};

use super::normalize::{min_max, normalize};

/// Where the semantic weight goes when the reranker signal is absent
#[derive(Debug, Clone, Copy)]
enum SemanticFallback {
    /// Shift semantic weight onto vector similarity
    ToVector,

    /// Shift semantic weight onto keyword relevance, scaling BM25 by the set
    /// maximum instead of min-max
    ToBm25,
}

/// Fuse article candidates in place and return them ranked best-first.
///
/// The relative order of candidates with equal final scores is preserved.
pub fn fuse_articles<D: Document>(
    candidates: Vec<Candidate<D>>,
    weights: &SignalWeights,
) -> Vec<Candidate<D>> {
    fuse(candidates, weights, SemanticFallback::ToVector)
}

/// Fuse author candidates in place and return them ranked best-first.
pub fn fuse_authors<D: Document>(
    candidates: Vec<Candidate<D>>,
    weights: &SignalWeights,
) -> Vec<Candidate<D>> {
    fuse(candidates, weights, SemanticFallback::ToBm25)
}

fn fuse<D: Document>(
    mut candidates: Vec<Candidate<D>>,
    weights: &SignalWeights,
    fallback: SemanticFallback,
) -> Vec<Candidate<D>> {
    if candidates.is_empty() {
        return candidates;
    }

    let semantic_available = candidates.iter().any(|c| c.scores.semantic > 0.0);

    let mut w_semantic = weights.semantic;
    let mut w_bm25 = weights.bm25;
    let mut w_vector = weights.vector;
    let w_business = weights.business;

    if !semantic_available {
        match fallback {
            SemanticFallback::ToVector => w_vector += w_semantic,
            SemanticFallback::ToBm25 => w_bm25 += w_semantic,
        }
        w_semantic = 0.0;
        debug!(
            ?fallback,
            "no semantic scores in candidate set, redistributing weight"
        );
    }

    let bm25_bounds = min_max(&component(&candidates, |s| s.bm25));
    let semantic_bounds = min_max(&component(&candidates, |s| s.semantic));
    let vector_bounds = min_max(&component(&candidates, |s| s.vector));

    // Max-scaling keeps the best keyword match at 1.0 when keyword relevance
    // is the dominant signal; min-max would zero it out in two-candidate sets.
    let bm25_max = candidates
        .iter()
        .map(|c| c.scores.bm25)
        .fold(f64::NEG_INFINITY, f64::max);
    let scale_bm25_by_max = !semantic_available && matches!(fallback, SemanticFallback::ToBm25);

    for candidate in &mut candidates {
        let s = candidate.scores;

        let bm25_norm = if scale_bm25_by_max {
            if bm25_max > 0.0 { s.bm25 / bm25_max } else { 0.0 }
        } else {
            normalize(s.bm25, bm25_bounds)
        };
        let semantic_norm = normalize(s.semantic, semantic_bounds);
        let vector_norm = normalize(s.vector, vector_bounds);

        candidate.final_score = Some(
            w_semantic * semantic_norm
                + w_bm25 * bm25_norm
                + w_vector * vector_norm
                + w_business * s.business,
        );
    }

    candidates.sort_by(|a, b| b.final_or_zero().total_cmp(&a.final_or_zero()));
    candidates
}

fn component<D>(
    candidates: &[Candidate<D>],
    pick: impl Fn(&crate::models::SignalScores) -> f64,
) -> Vec<f64> {
    candidates.iter().map(|c| pick(&c.scores)).collect()
}
