//! In-memory pagination over fused result sets
//!
//! Pages are sliced from the fully fused result set rather than re-queried,
//! so `total_results` and `total_pages` stay identical across pages of the
//! same query.

use crate::models::PageInfo;

/// A zero-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub index: usize,
    pub size: usize,
}

/// Slice one page out of a ranked result set.
///
/// A page past the end yields an empty result list with intact totals. A
/// zero-sized page is treated as empty with one page total.
pub fn paginate<T>(results: Vec<T>, page: PageRequest) -> (Vec<T>, PageInfo) {
    let total_results = results.len();
    let total_pages = if total_results > 0 && page.size > 0 {
        total_results.div_ceil(page.size)
    } else {
        1
    };

    let start = page.index.saturating_mul(page.size);
    let end = start.saturating_add(page.size).min(total_results);

    let page_results = if start < total_results {
        results
            .into_iter()
            .skip(start)
            .take(page.size)
            .collect()
    } else {
        Vec::new()
    };

    let info = PageInfo {
        page_index: page.index,
        page_size: page.size,
        total_results,
        total_pages,
        has_next: end < total_results,
        has_previous: page.index > 0,
    };

    (page_results, info)
}
