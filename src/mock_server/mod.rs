//! Mock BrawlAPI server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the BrawlAPI
//! for integration and end-to-end testing. Unlike wiremock, which mocks at the
//! HTTP level per-test, this server serves a whole fixture scenario and checks
//! the `Authorization` header like the real API does.
//!
//! # Example
//!
//! ```ignore
//! use brawlapi::mock_server::MockServer;
//! use brawlapi::BrawlClient;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = BrawlClient::builder(MockServer::TOKEN)
//!         .base_url(server.url())
//!         .build()
//!         .unwrap();
//!
//!     // Server comes with default fixtures
//!     let player = client.get_player("#2PP").await.unwrap();
//!     assert_eq!(player.name(), Some("Shelly Main"));
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::MockState;
