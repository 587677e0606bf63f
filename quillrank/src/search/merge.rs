//! Candidate merging across retrieval paths
//!
//! Text and vector hits for the same document must end up on one candidate
//! with both score components set. First-seen order is preserved because
//! fusion's sort is stable and ties should resolve toward the text path's
//! ranking.

use std::collections::HashMap;

use crate::backend::types::VectorHit;
use crate::models::{Candidate, Document};

/// An ordered, id-deduplicated collection of candidates
#[derive(Debug)]
pub struct CandidateSet<D> {
    candidates: Vec<Candidate<D>>,
    by_id: HashMap<String, usize>,
}

impl<D: Document> CandidateSet<D> {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Add a text-path candidate. A duplicate id keeps the first occurrence.
    pub fn push_text(&mut self, candidate: Candidate<D>) {
        if self.by_id.contains_key(&candidate.id) {
            return;
        }
        self.by_id
            .insert(candidate.id.clone(), self.candidates.len());
        self.candidates.push(candidate);
    }

    /// Merge a vector-path hit: accumulate onto an existing candidate, or
    /// append a vector-only candidate at the end.
    pub fn merge_vector_hit(&mut self, hit: VectorHit<D>) {
        if hit.id.is_empty() {
            return;
        }
        match self.by_id.get(&hit.id) {
            Some(&idx) => {
                self.candidates[idx].scores.vector = hit.score;
            }
            None => {
                self.by_id.insert(hit.id.clone(), self.candidates.len());
                self.candidates
                    .push(Candidate::from_vector_hit(hit.id, hit.doc, hit.score, 0.0));
            }
        }
    }

    /// Ids of candidates still missing their document payload
    pub fn missing_doc_ids(&self) -> Vec<String> {
        self.candidates
            .iter()
            .filter(|c| c.doc.is_none())
            .map(|c| c.id.clone())
            .collect()
    }

    /// Attach a back-filled payload and its freshness score to a candidate
    pub fn backfill(&mut self, id: &str, doc: D, business: f64) {
        if let Some(&idx) = self.by_id.get(id) {
            let candidate = &mut self.candidates[idx];
            candidate.doc = Some(doc);
            candidate.scores.business = business;
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Consume the set, yielding candidates in first-seen order
    pub fn into_candidates(self) -> Vec<Candidate<D>> {
        self.candidates
    }
}

impl<D: Document> Default for CandidateSet<D> {
    fn default() -> Self {
        Self::new()
    }
}
