//! Status handlers.

use crate::server::AppState;
use bookshelf_library::config::AppConfig;
use serde_json::{json, Value};

pub async fn get_status(state: &AppState, _params: &Value) -> bookshelf_library::Result<Value> {
    let book_count = state.api.book_count().await;

    Ok(json!({
        "success": true,
        "name": AppConfig::APP_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "message": "Rust backend running",
        "book_count": book_count,
        "data_root": state.api.data_root().display().to_string()
    }))
}
