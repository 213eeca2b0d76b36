//! Navigable view state: shelves overview and search.

use crate::models::Book;
use serde::Serialize;

/// The two in-page routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    #[default]
    Shelves,
    Search,
}

/// Transient view-layer state: the current route, the search query, and the
/// last fetched result list.
///
/// Nothing here is owned state - the query and results are derived copies,
/// recomputed on every input change and discarded when the search view is
/// dismissed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub route: Route,
    pub query: String,
    pub results: Vec<Book>,
}

impl ViewState {
    /// Navigate to the search view.
    pub fn open_search(&mut self) {
        self.route = Route::Search;
    }

    /// Dismiss the search view: return to the overview and clear the query
    /// and its results.
    pub fn close_search(&mut self) {
        self.route = Route::Shelves;
        self.query.clear();
        self.results.clear();
    }

    /// Record the latest query and its annotated results.
    pub fn set_results(&mut self, query: impl Into<String>, results: Vec<Book>) {
        self.route = Route::Search;
        self.query = query.into();
        self.results = results;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shelf;

    #[test]
    fn test_default_route_is_shelves() {
        assert_eq!(ViewState::default().route, Route::Shelves);
    }

    #[test]
    fn test_close_search_clears_query_and_results() {
        let mut view = ViewState::default();
        view.set_results(
            "fitness",
            vec![Book {
                id: "a".into(),
                title: "A".into(),
                authors: vec![],
                shelf: Shelf::None,
                cover_url: String::new(),
            }],
        );
        assert_eq!(view.route, Route::Search);

        view.close_search();
        assert_eq!(view.route, Route::Shelves);
        assert!(view.query.is_empty());
        assert!(view.results.is_empty());
    }

    #[test]
    fn test_set_results_replaces_previous_query() {
        let mut view = ViewState::default();
        view.set_results("first", vec![]);
        view.set_results("second", vec![]);
        assert_eq!(view.query, "second");
    }
}
