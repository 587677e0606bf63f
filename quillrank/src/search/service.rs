//! The hybrid search service
//!
//! `HybridSearchService` is the crate's main entry point. It plans the
//! query, runs text and vector retrieval concurrently, merges and
//! back-fills candidates, fuses scores, and paginates the ranked output.
//!
//! Semantic capability is session state: when the backend rejects a
//! semantic query as unsupported, the service downgrades itself once and
//! serves the rest of its lifetime in simple mode. The flag only ever moves
//! from true to false.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::backend::types::{QueryMode, TextQuery, VectorHit, VectorQuery};
use crate::backend::{BackendError, SearchIndex};
use crate::config::QuillrankConfig;
use crate::embedding::EmbeddingProvider;
use crate::matching::FuzzyNameMatcher;
use crate::models::{
    ArticleDoc, AuthorDoc, Candidate, CombinedSearchResponse, Document, SearchKind, SearchResponse,
};
use crate::planner::{QueryPlan, QueryPlanner, SearchParameters};
use crate::scoring::{FreshnessScorer, fuse_articles, fuse_authors};
use crate::{QuillrankError, Result};

use super::merge::CandidateSet;
use super::pagination::{PageRequest, paginate};

/// Orchestrates hybrid retrieval over the article and author indexes
pub struct HybridSearchService {
    articles: Arc<dyn SearchIndex<Doc = ArticleDoc>>,
    authors: Arc<dyn SearchIndex<Doc = AuthorDoc>>,
    embedder: Arc<dyn EmbeddingProvider>,
    planner: Option<QueryPlanner>,
    matcher: FuzzyNameMatcher,
    freshness: FreshnessScorer,
    config: QuillrankConfig,
    semantic_enabled: AtomicBool,
}

impl HybridSearchService {
    pub fn new(
        articles: Arc<dyn SearchIndex<Doc = ArticleDoc>>,
        authors: Arc<dyn SearchIndex<Doc = AuthorDoc>>,
        embedder: Arc<dyn EmbeddingProvider>,
        planner: Option<QueryPlanner>,
        config: QuillrankConfig,
    ) -> Self {
        let freshness = FreshnessScorer::new(config.freshness.half_life_days);
        Self {
            articles,
            authors,
            embedder,
            planner,
            matcher: FuzzyNameMatcher::default(),
            freshness,
            config,
            semantic_enabled: AtomicBool::new(true),
        }
    }

    /// Whether semantic text retrieval is currently enabled for this session
    pub fn semantic_enabled(&self) -> bool {
        self.semantic_enabled.load(Ordering::Relaxed)
    }

    /// Probe the articles index for semantic capability.
    ///
    /// Intended to run once at startup; a capability rejection downgrades
    /// the session immediately instead of on the first real query. Other
    /// probe failures are logged and leave the flag untouched, the runtime
    /// downgrade path covers them.
    pub async fn probe_semantic(&self) {
        let probe = TextQuery::new("test", QueryMode::Semantic, 1);
        match self
            .with_deadline(self.articles.text_search(&probe))
            .await
        {
            Ok(_) => info!("semantic search is available"),
            Err(err) if err.is_capability_rejection() => {
                warn!("semantic search not available, downgrading to simple mode");
                self.semantic_enabled.store(false, Ordering::Relaxed);
            }
            Err(err) => warn!(%err, "semantic probe inconclusive"),
        }
    }

    /// Search articles: plan, retrieve over both paths, fuse, paginate.
    pub async fn search_articles(
        &self,
        query: &str,
        k: usize,
        page: Option<PageRequest>,
    ) -> Result<SearchResponse<ArticleDoc>> {
        let plan = self.plan_for(query, SearchKind::Articles).await;
        self.search_articles_planned(&plan, k, page).await
    }

    /// Search authors by fuzzy name matching against the full author list.
    pub async fn search_authors(
        &self,
        query: &str,
        k: usize,
        page: Option<PageRequest>,
    ) -> Result<SearchResponse<AuthorDoc>> {
        let plan = self.plan_for(query, SearchKind::Authors).await;
        self.search_authors_planned(&plan, k, page).await
    }

    /// Search both entity types with one query.
    ///
    /// Long queries are normalized through the planner first; a plan that
    /// declares the input not meaningful short-circuits to empty responses.
    /// A failure on either side degrades that side to an empty response
    /// instead of failing the whole call.
    pub async fn search(
        &self,
        query: &str,
        k: usize,
        page: Option<PageRequest>,
    ) -> CombinedSearchResponse {
        let word_count = query.split_whitespace().count();
        let normalized = match &self.planner {
            Some(planner) if word_count >= self.config.planner.min_query_words => {
                let plan = planner.plan(query).await;
                if !plan.is_meaningful {
                    debug!(%query, "query classified as not meaningful");
                    return CombinedSearchResponse {
                        articles: SearchResponse::empty(plan.normalized_query.clone(), SearchKind::Articles),
                        authors: SearchResponse::empty(plan.normalized_query, SearchKind::Authors),
                    };
                }
                plan.normalized_query
            }
            _ => query.to_string(),
        };

        let (articles, authors) = tokio::join!(
            self.search_articles(&normalized, k, page),
            self.search_authors(&normalized, k, page),
        );

        let articles = articles.unwrap_or_else(|err| {
            warn!(%err, "articles search failed, returning empty side");
            SearchResponse::empty(normalized.clone(), SearchKind::Articles)
        });
        let authors = authors.unwrap_or_else(|err| {
            warn!(%err, "authors search failed, returning empty side");
            SearchResponse::empty(normalized.clone(), SearchKind::Authors)
        });

        CombinedSearchResponse { articles, authors }
    }

    async fn search_articles_planned(
        &self,
        plan: &QueryPlan,
        k: usize,
        page: Option<PageRequest>,
    ) -> Result<SearchResponse<ArticleDoc>> {
        let retrieval = &self.config.retrieval;
        let search_k = search_depth(k, page, retrieval.article_page_floor);
        debug!(
            query = %plan.normalized_query,
            search_k,
            paginated = page.is_some(),
            "starting article search"
        );

        // Vector retrieval runs on its own task so the two backend round
        // trips overlap.
        let vector_task = {
            let articles = Arc::clone(&self.articles);
            let embedder = Arc::clone(&self.embedder);
            let query = plan.normalized_query.clone();
            let params = plan.search_parameters.clone();
            let field = retrieval.article_vector_field.clone();
            let top = oversample(search_k, retrieval.vector_oversample);
            let deadline = self.deadline();
            tokio::spawn(async move {
                let embedding = embedder.embed(&query).await?;
                let vector_query = VectorQuery {
                    embedding,
                    field,
                    top,
                    filter: params.filter.clone(),
                    order_by: params.order_by.clone().unwrap_or_default(),
                };
                let hits =
                    with_deadline(deadline, articles.vector_search(&vector_query)).await?;
                Ok::<Vec<VectorHit<ArticleDoc>>, QuillrankError>(hits)
            })
        };

        let text_hits = self
            .article_text_search(&plan.normalized_query, &plan.search_parameters, search_k)
            .await?;
        let vector_hits = vector_task
            .await
            .map_err(|err| QuillrankError::Task(err.to_string()))??;

        let mut set = CandidateSet::new();
        for hit in text_hits {
            let business = self.freshness.score(hit.doc.business_date());
            set.push_text(Candidate::from_text_hit(
                hit.doc,
                hit.score,
                hit.reranker_score.unwrap_or(0.0),
                business,
            ));
        }
        for hit in vector_hits {
            set.merge_vector_hit(hit);
        }

        let missing = set.missing_doc_ids();
        if !missing.is_empty() {
            debug!(count = missing.len(), "back-filling document payloads");
            for doc in self.fetch_documents(self.articles.as_ref(), &missing).await {
                let business = self.freshness.score(doc.business_date());
                let id = doc.id().to_string();
                set.backfill(&id, doc, business);
            }
        }

        let mut fused = fuse_articles(set.into_candidates(), &self.config.article_weights);
        self.apply_score_threshold(&mut fused);

        Ok(self.finish(fused, k, page, plan.normalized_query.clone(), SearchKind::Articles))
    }

    async fn search_authors_planned(
        &self,
        plan: &QueryPlan,
        k: usize,
        page: Option<PageRequest>,
    ) -> Result<SearchResponse<AuthorDoc>> {
        let search_k = search_depth(k, page, self.config.retrieval.author_page_floor);
        debug!(query = %plan.normalized_query, search_k, "starting author search");

        let all_authors = self.with_deadline(self.authors.list_all()).await?;
        let matches = self
            .matcher
            .top_matches(&plan.normalized_query, &all_authors, search_k);
        debug!(
            candidates = all_authors.len(),
            matched = matches.len(),
            "fuzzy matching complete"
        );

        let candidates = matches
            .into_iter()
            .map(|m| Candidate::from_match_score(m.author, m.score))
            .collect();

        let mut fused = fuse_authors(candidates, &self.config.author_weights);
        self.apply_score_threshold(&mut fused);

        Ok(self.finish(fused, k, page, plan.normalized_query.clone(), SearchKind::Authors))
    }

    /// Text retrieval with the session's semantic downgrade logic: a
    /// capability rejection flips the flag and retries the same query in
    /// simple mode immediately.
    async fn article_text_search(
        &self,
        query: &str,
        params: &SearchParameters,
        search_k: usize,
    ) -> Result<Vec<crate::backend::types::TextHit<ArticleDoc>>> {
        let retrieval = &self.config.retrieval;

        if self.semantic_enabled() {
            let top = oversample(search_k, retrieval.semantic_oversample);
            let query = build_text_query(query, QueryMode::Semantic, top, params);
            match self.with_deadline(self.articles.text_search(&query)).await {
                Ok(hits) => return Ok(hits),
                Err(err) if err.is_capability_rejection() => {
                    warn!("semantic query rejected at runtime, downgrading to simple mode");
                    self.semantic_enabled.store(false, Ordering::Relaxed);
                    let retry = query.as_simple();
                    return Ok(self.with_deadline(self.articles.text_search(&retry)).await?);
                }
                Err(err) => return Err(err.into()),
            }
        }

        let top = oversample(search_k, retrieval.simple_oversample);
        let query = build_text_query(query, QueryMode::Simple, top, params);
        Ok(self.with_deadline(self.articles.text_search(&query)).await?)
    }

    /// Batch document fetch with per-id degradation: if the batch call
    /// fails, each id is retried alone and individual failures are skipped.
    async fn fetch_documents<D: Document>(
        &self,
        index: &dyn SearchIndex<Doc = D>,
        ids: &[String],
    ) -> Vec<D> {
        match self.with_deadline(index.fetch_by_ids(ids)).await {
            Ok(docs) => docs,
            Err(err) => {
                warn!(%err, "batch document fetch failed, retrying individually");
                let mut docs = Vec::with_capacity(ids.len());
                for id in ids {
                    match self.with_deadline(index.get_document(id)).await {
                        Ok(doc) => docs.push(doc),
                        Err(err) => warn!(%id, %err, "document fetch failed, skipping"),
                    }
                }
                docs
            }
        }
    }

    fn apply_score_threshold<D: Document>(&self, fused: &mut Vec<Candidate<D>>) {
        let filtering = &self.config.filtering;
        if !filtering.enabled || filtering.threshold <= 0.0 {
            return;
        }
        let before = fused.len();
        fused.retain(|c| c.final_or_zero() >= filtering.threshold);
        if fused.len() < before {
            debug!(
                before,
                after = fused.len(),
                threshold = filtering.threshold,
                "score threshold applied"
            );
        }
    }

    fn finish<D: Document>(
        &self,
        mut fused: Vec<Candidate<D>>,
        k: usize,
        page: Option<PageRequest>,
        normalized_query: String,
        search_type: SearchKind,
    ) -> SearchResponse<D> {
        match page {
            Some(page) => {
                let (items, info) = paginate(fused, page);
                SearchResponse {
                    results: items.into_iter().map(Into::into).collect(),
                    normalized_query,
                    pagination: Some(info),
                    search_type,
                }
            }
            None => {
                fused.truncate(k);
                SearchResponse {
                    results: fused.into_iter().map(Into::into).collect(),
                    normalized_query,
                    pagination: None,
                    search_type,
                }
            }
        }
    }

    /// Plan the query, forcing the plan onto this endpoint's entity type.
    async fn plan_for(&self, query: &str, kind: SearchKind) -> QueryPlan {
        let mut plan = match &self.planner {
            Some(planner) => planner.plan(query).await,
            None => QueryPlan::fallback(query),
        };
        plan.search_type = kind;
        plan
    }

    fn deadline(&self) -> Duration {
        Duration::from_secs(self.config.retrieval.backend_timeout_secs)
    }

    async fn with_deadline<T>(
        &self,
        fut: impl Future<Output = std::result::Result<T, BackendError>>,
    ) -> std::result::Result<T, BackendError> {
        with_deadline(self.deadline(), fut).await
    }
}

async fn with_deadline<T>(
    deadline: Duration,
    fut: impl Future<Output = std::result::Result<T, BackendError>>,
) -> std::result::Result<T, BackendError> {
    match timeout(deadline, fut).await {
        Ok(result) => result,
        Err(_) => Err(BackendError::Timeout(deadline)),
    }
}

/// Candidate pool depth: paginated calls fetch a fixed-floor pool so totals
/// stay stable across pages.
fn search_depth(k: usize, page: Option<PageRequest>, floor: usize) -> usize {
    if page.is_some() {
        (k * 4).max(floor)
    } else {
        k
    }
}

fn oversample(search_k: usize, factor: f64) -> usize {
    ((search_k as f64) * factor) as usize
}

fn build_text_query(
    query: &str,
    mode: QueryMode,
    top: usize,
    params: &SearchParameters,
) -> TextQuery {
    let mut text_query = TextQuery::new(query, mode, top);
    text_query.filter = params.filter.clone();
    text_query.order_by = params.order_by.clone().unwrap_or_default();
    text_query.search_fields = params.search_fields.clone().unwrap_or_default();
    text_query.highlight_fields = params.highlight_fields.clone();
    text_query
}
