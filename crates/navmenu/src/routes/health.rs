//! Health check endpoint.
//!
//! Reports the default language's menu size and how many languages are
//! available.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    languages: usize,
    default_language: String,
    /// Root entries in the default language's menu.
    roots: usize,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let menus = state.menus();
    let tree = menus.menu(menus.default_language());

    Json(HealthResponse {
        status: "healthy",
        languages: menus.languages().len(),
        default_language: menus.default_language().to_string(),
        roots: tree.len(),
    })
}

/// Create the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
