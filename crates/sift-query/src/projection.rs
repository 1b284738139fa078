//! Projection of raw search responses into result envelopes.

use sift_core::{SearchResult, MAX_RESULT_WINDOW};

use crate::response::SearchResponse;

/// Normalize a raw response.
///
/// `page` and `size` are left at zero; the caller stamps them with
/// [`SearchResult::with_page`]. `max_results` is capped at the store's
/// paging window because hits beyond it can never be fetched.
pub fn project(response: SearchResponse) -> SearchResult {
    let max = response.total();
    let hits = response
        .hits
        .map(|hits| {
            hits.hits
                .into_iter()
                .map(|hit| hit.source.unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();

    SearchResult {
        size: 0,
        page: 0,
        max,
        max_results: max.min(u64::from(MAX_RESULT_WINDOW)),
        hits,
        duration: response.took,
    }
}
