//! Response wrapping for frontend compatibility.
//!
//! The frontend expects responses in the format `{success: bool, ...data}`,
//! but some handlers return raw values. This module transforms raw results
//! into the expected envelopes.

use serde_json::{json, Value};

/// Wrap handler results to match the frontend's expected format.
pub fn wrap_response(method: &str, result: Value) -> Value {
    match method {
        // List wrappers
        "get_books" => {
            json!({
                "success": true,
                "books": if result.is_null() { json!([]) } else { result }
            })
        }

        // Dict wrappers
        "get_shelves" => {
            json!({
                "success": true,
                "shelves": if result.is_null() { json!({}) } else { result }
            })
        }

        "set_book_shelf" => {
            json!({
                "success": true,
                "book": result
            })
        }

        "refresh_covers" => {
            json!({
                "success": true,
                "updated": result.as_u64().unwrap_or(0)
            })
        }

        "get_view" | "open_search" | "close_search" => {
            json!({
                "success": true,
                "view": result
            })
        }

        // Passthrough methods (already in correct format)
        "get_status" | "search_books" => result,

        // Default: return as-is (for methods not explicitly handled)
        _ => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_books() {
        let books = json!([{"id": "a"}, {"id": "b"}]);
        let wrapped = wrap_response("get_books", books.clone());

        assert!(wrapped.get("success").unwrap().as_bool().unwrap());
        assert_eq!(wrapped.get("books").unwrap(), &books);
    }

    #[test]
    fn test_wrap_null_books() {
        let wrapped = wrap_response("get_books", Value::Null);

        assert!(wrapped.get("success").unwrap().as_bool().unwrap());
        assert_eq!(wrapped.get("books").unwrap(), &json!([]));
    }

    #[test]
    fn test_wrap_refresh_covers() {
        let wrapped = wrap_response("refresh_covers", json!(3));
        assert!(wrapped.get("success").unwrap().as_bool().unwrap());
        assert_eq!(wrapped.get("updated").unwrap(), &json!(3));
    }

    #[test]
    fn test_passthrough_method() {
        let data = json!({"success": true, "books": [], "query": "x"});
        let wrapped = wrap_response("search_books", data.clone());
        assert_eq!(wrapped, data);
    }

    #[test]
    fn test_wrap_view() {
        let view = json!({"route": "shelves", "query": "", "results": []});
        let wrapped = wrap_response("close_search", view.clone());
        assert!(wrapped.get("success").unwrap().as_bool().unwrap());
        assert_eq!(wrapped.get("view").unwrap(), &view);
    }
}
