//! Navigation menu endpoints.
//!
//! - `GET /api/menu`: the localized tree
//! - `GET /api/menu/trail/{id}`: root-to-node chain for breadcrumbs
//!
//! Both accept `?lang=` and fall back to Accept-Language, then the default
//! language. The language served is echoed in `Content-Language`.

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_LANGUAGE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::language::{is_valid_language_code, select_language};
use crate::menu;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct LanguageQuery {
    lang: Option<String>,
}

/// One step of a trail.
#[derive(Debug, Serialize)]
struct TrailStep<'a> {
    id: &'a str,
    name: &'a str,
    level: u8,
}

fn request_language(
    state: &AppState,
    query: &LanguageQuery,
    headers: &HeaderMap,
) -> AppResult<String> {
    if let Some(lang) = query.lang.as_deref()
        && !is_valid_language_code(lang)
    {
        return Err(AppError::BadRequest(format!("invalid language code '{lang}'")));
    }

    let menus = state.menus();
    Ok(select_language(
        query.lang.as_deref(),
        headers,
        &menus.languages(),
        menus.default_language(),
    ))
}

async fn get_menu(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let language = request_language(&state, &query, &headers)?;
    let tree = state.menus().menu(&language);

    Ok(([(CONTENT_LANGUAGE, language)], Json(&tree[..])).into_response())
}

async fn get_trail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let language = request_language(&state, &query, &headers)?;
    let tree = state.menus().menu(&language);

    let trail = menu::trail(&tree, &id).ok_or(AppError::NotFound)?;
    let steps: Vec<TrailStep<'_>> = trail
        .iter()
        .map(|node| TrailStep {
            id: &node.id,
            name: &node.name,
            level: node.level,
        })
        .collect();

    Ok(([(CONTENT_LANGUAGE, language)], Json(steps)).into_response())
}

/// Create the menu router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/menu", get(get_menu))
        .route("/api/menu/trail/{id}", get(get_trail))
}
