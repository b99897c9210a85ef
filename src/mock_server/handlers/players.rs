//! Player endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::{authorize, error, TagQuery};
use crate::mock_server::state::MockState;

/// GET /api/player?tag={tag}
pub async fn get_player(
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

    match state.get_player(&tag) {
        Some(player) => (StatusCode::OK, Json(player.clone())).into_response(),
        None => error(
            StatusCode::NOT_FOUND,
            &format!("No player found with tag: {tag}"),
        ),
    }
}
