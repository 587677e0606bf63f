//! Core data model for search candidates and results
//!
//! Documents flowing through the ranking pipeline are well-typed records
//! rather than dynamic maps: every retrieval path produces the same
//! `Candidate` shape, and a missing field is an `Option`, not a runtime
//! lookup failure.

mod candidate;
mod document;

pub use candidate::{
    Candidate, CombinedSearchResponse, PageInfo, SearchHit, SearchKind, SearchResponse,
    SignalScores,
};
pub use document::{ArticleDoc, AuthorDoc, BusinessDate, Document};
