//! Mock BrawlAPI server.
//!
//! Provides an axum-based HTTP server that simulates the BrawlAPI.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// A mock BrawlAPI server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a realistic API implementation.
pub struct MockServer {
    /// The API base URL (`http://127.0.0.1:<port>/api`).
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Token required by servers started with [`MockServer::start`].
    pub const TOKEN: &'static str = "mock-token";

    /// Start a new mock server with default fixtures.
    ///
    /// Requests must carry [`MockServer::TOKEN`] in the `Authorization`
    /// header. The server listens on a random available port and returns
    /// immediately. Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state and no token requirement.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Server error");
        });

        Self {
            url: format!("http://{}/api", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the API base URL of the mock server.
    ///
    /// Use this URL as the base URL when building a `BrawlClient`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        let scenario = Fixtures::default_scenario();
        Self::state_from_scenario(scenario).with_required_token(Self::TOKEN)
    }

    /// Create state from a scenario.
    pub fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new()
            .with_top_players(scenario.top_players)
            .with_top_clubs(scenario.top_clubs)
            .with_events(scenario.current_events, scenario.upcoming_events);

        for player in scenario.players {
            state = state.with_player(player);
        }

        for club in scenario.clubs {
            state = state.with_club(club);
        }

        for (brawler, entries) in scenario.brawler_leaderboards {
            state = state.with_brawler_leaderboard(&brawler, entries);
        }

        state.misc = scenario.misc;
        state.about = scenario.about;
        state.endpoints = scenario.endpoints;
        state
    }

    /// Create the axum router with all routes.
    pub(crate) fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Discovery
            .route("/api", get(handlers::list_endpoints))
            .route("/api/", get(handlers::list_endpoints))
            // Profiles
            .route("/api/player", get(handlers::get_player))
            .route("/api/club", get(handlers::get_club))
            .route("/api/clubSearch", get(handlers::search_clubs))
            // Leaderboards
            .route("/api/leaderboards/players", get(handlers::top_players))
            .route("/api/leaderboards/clubs", get(handlers::top_clubs))
            // Game data
            .route("/api/events", get(handlers::get_events))
            .route("/api/misc", get(handlers::get_misc))
            .route("/api/about", get(handlers::get_about))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
