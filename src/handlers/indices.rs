use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use std::sync::Arc;

use crate::es;
use crate::handlers::AppState;
use crate::templates::InventoryTemplate;

/// GET / - Zobrazí katalog indexů
///
/// Every fetch failure degrades to one message on the page; the full
/// diagnostic is already logged inside the fetch.
pub async fn list_indices(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let (indices, error_message) = match es::catalog::fetch(&state.params).await {
        Ok(indices) => (indices, None),
        Err(e) => (Vec::new(), Some(e.to_string())),
    };

    let template = InventoryTemplate {
        indices,
        error_message,
    };

    template
        .render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}
