//! Simulated web search.

use edubuddy_protocol::SearchHit;
use log::info;

/// Default number of hits returned by a search.
pub const DEFAULT_SEARCH_TOP_K: usize = 3;

/// Fabricate `top_k` search hits for `query`. No network access.
///
/// Titles and URLs embed the query and a 1-based index.
pub fn web_search(query: &str, top_k: usize) -> Vec<SearchHit> {
    info!("Tool:web_search called (query={query}, top_k={top_k})");
    (1..=top_k)
        .map(|idx| SearchHit {
            title: format!("Simulated Article about {query} - {idx}"),
            snippet: "Key point ...".to_string(),
            url: format!("https://example.com/{query}/{idx}"),
        })
        .collect()
}
