//! HTTP route handlers.

pub mod health;
pub mod menu;

use axum::Router;

use crate::state::AppState;

/// All routes, bound to `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(menu::router())
        .merge(health::router())
        .with_state(state)
}
