//! Leaderboard endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{authorize, error};
use crate::mock_server::state::MockState;

/// Query parameters for leaderboards.
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub count: Option<usize>,
    pub brawler: Option<String>,
}

/// GET /api/leaderboards/players
pub async fn top_players(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<LeaderboardQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }

    match state.top_players(query.count, query.brawler.as_deref()) {
        Some(players) => (StatusCode::OK, Json(players)).into_response(),
        None => error(StatusCode::NOT_FOUND, "Unknown brawler"),
    }
}

/// GET /api/leaderboards/clubs
pub async fn top_clubs(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<LeaderboardQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }

    (StatusCode::OK, Json(state.top_clubs(query.count))).into_response()
}
