pub mod indices;

use axum::{http::StatusCode, response::IntoResponse};

use crate::config::ConnectionParams;

/// Shared state - konfigurace načtená při startu
pub struct AppState {
    pub params: ConnectionParams,
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
