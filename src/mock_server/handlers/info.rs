//! Event, misc and metadata endpoint handlers.
//!
//! These endpoints answer with a `{"data": ...}` envelope.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use super::{authorize, error};
use crate::mock_server::state::MockState;

/// Query parameters for the events endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

fn envelope(data: Value) -> Response {
    (StatusCode::OK, Json(json!({ "data": data }))).into_response()
}

/// GET /api/events?type=current|upcoming
pub async fn get_events(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<EventsQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }

    match query.kind.as_deref() {
        Some("current") => envelope(state.current_events.clone()),
        Some("upcoming") => envelope(state.upcoming_events.clone()),
        _ => error(
            StatusCode::BAD_REQUEST,
            "type must be 'current' or 'upcoming'",
        ),
    }
}

/// GET /api/misc
pub async fn get_misc(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    envelope(state.misc.clone())
}

/// GET /api/about
pub async fn get_about(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    envelope(state.about.clone())
}

/// GET /api/
pub async fn list_endpoints(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    envelope(json!(state.endpoints))
}
