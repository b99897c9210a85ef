//! Club endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{authorize, error, TagQuery};
use crate::mock_server::state::MockState;

/// Query parameters for club search.
#[derive(Debug, Default, Deserialize)]
pub struct ClubSearchQuery {
    pub name: Option<String>,
}

/// GET /api/club?tag={tag}
pub async fn get_club(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<TagQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }

    let Some(tag) = query.tag.filter(|t| !t.is_empty()) else {
        return error(StatusCode::BAD_REQUEST, "Missing tag parameter");
    };

    match state.get_club(&tag) {
        Some(club) => (StatusCode::OK, Json(club.clone())).into_response(),
        None => error(
            StatusCode::NOT_FOUND,
            &format!("No club found with tag: {tag}"),
        ),
    }
}

/// GET /api/clubSearch?name={name}
pub async fn search_clubs(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<ClubSearchQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }

    let clubs = state.search_clubs(query.name.as_deref().unwrap_or_default());
    (StatusCode::OK, Json(clubs)).into_response()
}
