//! HTTP request handlers for the mock server.

pub mod clubs;
pub mod info;
pub mod leaderboards;
pub mod players;

pub use clubs::*;
pub use info::*;
pub use leaderboards::*;
pub use players::*;

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::mock_server::state::MockState;

/// Query parameters for tag lookups.
#[derive(Debug, Default, Deserialize)]
pub struct TagQuery {
    pub tag: Option<String>,
}

/// Reject the request unless it carries the token the state requires.
fn authorize(state: &MockState, headers: &HeaderMap) -> Result<(), Response> {
    let token = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if state.is_authorized(token) {
        Ok(())
    } else {
        Err(error(StatusCode::UNAUTHORIZED, "Invalid authorization token"))
    }
}

/// JSON error body in the shape the real API uses.
fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": true,
            "message": message,
        })),
    )
        .into_response()
}
