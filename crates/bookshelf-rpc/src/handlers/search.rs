//! Search and view-navigation handlers.

use super::{get_i64_param, require_str_param};
use crate::server::AppState;
use bookshelf_library::config::NetworkConfig;
use serde_json::{json, Value};

/// Run a catalog search and record it in the view state.
///
/// Error-as-data: the response always carries `success` and a `books` array,
/// empty on failure, so a flaky catalog never breaks the search view.
pub async fn search_books(state: &AppState, params: &Value) -> bookshelf_library::Result<Value> {
    let query = require_str_param(params, "query", "query")?;
    let limit = search_limit(params);

    let results = state.api.search(&query, limit).await;

    let mut view = state.view.write().await;
    view.set_results(&query, results.clone());

    Ok(json!({
        "success": true,
        "query": query,
        "books": results
    }))
}

/// Result limit from params. Non-positive or absent values fall back to the
/// default rather than being forwarded to the catalog.
fn search_limit(params: &Value) -> usize {
    get_i64_param(params, "max_results", "maxResults")
        .and_then(|limit| usize::try_from(limit).ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(NetworkConfig::SEARCH_MAX_RESULTS)
}

/// Navigate to the search view.
pub async fn open_search(state: &AppState, _params: &Value) -> bookshelf_library::Result<Value> {
    let mut view = state.view.write().await;
    view.open_search();
    Ok(serde_json::to_value(&*view)?)
}

/// Dismiss the search view, clearing the query and its results.
pub async fn close_search(state: &AppState, _params: &Value) -> bookshelf_library::Result<Value> {
    let mut view = state.view.write().await;
    view.close_search();
    Ok(serde_json::to_value(&*view)?)
}

/// Current view state.
pub async fn get_view(state: &AppState, _params: &Value) -> bookshelf_library::Result<Value> {
    let view = state.view.read().await;
    Ok(serde_json::to_value(&*view)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_limit_defaults_when_absent() {
        assert_eq!(
            search_limit(&json!({})),
            NetworkConfig::SEARCH_MAX_RESULTS
        );
    }

    #[test]
    fn test_search_limit_uses_positive_value() {
        assert_eq!(search_limit(&json!({"maxResults": 5})), 5);
        assert_eq!(search_limit(&json!({"max_results": 7})), 7);
    }

    #[test]
    fn test_search_limit_rejects_non_positive_values() {
        // A negative limit must not wrap into a huge unsigned value
        assert_eq!(
            search_limit(&json!({"maxResults": -1})),
            NetworkConfig::SEARCH_MAX_RESULTS
        );
        assert_eq!(
            search_limit(&json!({"maxResults": 0})),
            NetworkConfig::SEARCH_MAX_RESULTS
        );
    }
}
