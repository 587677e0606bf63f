//! Typed document payloads returned by the search backend
//!
//! Retrieval paths select different field subsets, so everything except the
//! document id is optional. A document that arrives without a payload at all
//! (vector hits often return only id + score) is represented as
//! `Option<Doc>` on the candidate and back-filled later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A content date in any of the shapes the backend is known to emit.
///
/// Upstream indexes are not consistent about date encoding: some documents
/// carry RFC 3339 timestamps, some carry bare `YYYY-MM-DD` strings, and some
/// carry epoch numbers (seconds or milliseconds). The freshness scorer is the
/// only consumer and treats anything unparseable as "no date".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BusinessDate {
    /// Epoch seconds, or epoch milliseconds when the value exceeds 1e12
    Epoch(f64),

    /// A fully parsed UTC timestamp (RFC 3339 on the wire)
    Timestamp(DateTime<Utc>),

    /// Any other string form, parsed leniently by the freshness scorer
    Text(String),
}

impl From<DateTime<Utc>> for BusinessDate {
    fn from(ts: DateTime<Utc>) -> Self {
        BusinessDate::Timestamp(ts)
    }
}

/// Common behavior for documents that can flow through the ranking pipeline
pub trait Document: Clone + Send + Sync + 'static {
    /// The backend's primary key for this document
    fn id(&self) -> &str;

    /// The content date used for freshness scoring, when the entity has one
    fn business_date(&self) -> Option<&BusinessDate> {
        None
    }
}

/// An article document as returned by the articles index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleDoc {
    pub id: String,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub author_name: Option<String>,
    pub status: Option<String>,
    pub tags: Vec<String>,
    pub business_date: Option<BusinessDate>,
}

impl Document for ArticleDoc {
    fn id(&self) -> &str {
        &self.id
    }

    fn business_date(&self) -> Option<&BusinessDate> {
        self.business_date.as_ref()
    }
}

/// An author document as returned by the authors index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorDoc {
    pub id: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
}

impl Document for AuthorDoc {
    fn id(&self) -> &str {
        &self.id
    }
}
