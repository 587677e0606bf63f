//! Hybrid retrieval orchestration
//!
//! This module ties the retrieval paths together: it runs text and vector
//! queries against the backend, merges their hits into one candidate set,
//! back-fills missing payloads, hands the set to the fusion engine, and
//! slices the ranked result for pagination.

mod merge;
mod pagination;
mod service;

pub use merge::CandidateSet;
pub use pagination::{PageRequest, paginate};
pub use service::HybridSearchService;
