//! LLM-backed query planning
//!
//! The planner turns free text into a [`QueryPlan`]: whether the query is
//! worth running, which entity type it targets, a normalized query string,
//! and optional backend search parameters. Planning is strictly best-effort:
//! any provider failure or malformed completion degrades to a fallback plan
//! built from the raw query, never to an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::llm::prompts::{PLANNER_SYSTEM_PROMPT, planner_user_prompt};
use crate::llm::LlmProvider;
use crate::models::SearchKind;

/// Optional backend parameters the planner may attach to a query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParameters {
    /// OData filter expression
    pub filter: Option<String>,

    /// Explicit sort expressions, e.g. `business_date desc`
    pub order_by: Option<Vec<String>>,

    /// Restrict matching to these fields
    pub search_fields: Option<Vec<String>>,

    /// Comma-separated fields to highlight
    pub highlight_fields: Option<String>,
}

/// The planner's decision for one query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryPlan {
    /// Whether the input is a real search query at all
    #[serde(default = "default_meaningful")]
    pub is_meaningful: bool,

    /// Which entity type the query targets
    #[serde(default = "default_search_type")]
    pub search_type: SearchKind,

    /// The normalized query text to send to the backend
    pub normalized_query: String,

    #[serde(default)]
    pub search_parameters: SearchParameters,
}

fn default_meaningful() -> bool {
    true
}

fn default_search_type() -> SearchKind {
    SearchKind::Articles
}

impl QueryPlan {
    /// The plan used when no planner is configured or planning failed:
    /// run the raw query as an articles search with no extra parameters.
    pub fn fallback(query: &str) -> Self {
        Self {
            is_meaningful: true,
            search_type: SearchKind::Articles,
            normalized_query: query.to_string(),
            search_parameters: SearchParameters::default(),
        }
    }
}

/// Plans queries through an LLM provider, degrading to [`QueryPlan::fallback`]
/// on any failure
#[derive(Clone)]
pub struct QueryPlanner {
    llm: Arc<dyn LlmProvider>,
}

impl QueryPlanner {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Plan one query. This never fails; errors are logged and replaced by
    /// the fallback plan.
    pub async fn plan(&self, query: &str) -> QueryPlan {
        let completion = match self
            .llm
            .complete(PLANNER_SYSTEM_PROMPT, &planner_user_prompt(query))
            .await
        {
            Ok(text) => text,
            Err(err) => {
                warn!(%err, "query planning failed, using fallback plan");
                return QueryPlan::fallback(query);
            }
        };

        match parse_plan(&completion) {
            Some(plan) => {
                debug!(
                    normalized_query = %plan.normalized_query,
                    search_type = %plan.search_type,
                    is_meaningful = plan.is_meaningful,
                    "query plan produced"
                );
                plan
            }
            None => {
                warn!("planner returned malformed JSON, using fallback plan");
                QueryPlan::fallback(query)
            }
        }
    }
}

/// Parse a completion into a plan. Tolerates surrounding prose by extracting
/// the outermost JSON object; requires `normalized_query` to be present and
/// non-empty.
fn parse_plan(completion: &str) -> Option<QueryPlan> {
    let json = extract_json_object(completion)?;
    let plan: QueryPlan = serde_json::from_str(json).ok()?;
    if plan.normalized_query.trim().is_empty() {
        return None;
    }
    Some(plan)
}

fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
