//! BrawlAPI client library.
//!
//! A Rust library for the BrawlAPI game statistics service: player and
//! club profiles, leaderboards, event rotations and API metadata.
//!
//! # Quick Start
//!
//! ```no_run
//! use brawlapi::{BrawlClient, TopPlayersQuery};
//!
//! #[tokio::main]
//! async fn main() -> brawlapi::Result<()> {
//!     // Create client from environment variables
//!     let client = BrawlClient::from_env()?;
//!
//!     // Tags are validated and normalized before any request is made
//!     let player = client.get_player("#2pp").await?;
//!     println!("Player: {:?}", player.name());
//!
//!     // Follow-up calls go through the client that fetched the player
//!     if let Some(club) = player.club().await? {
//!         println!("Club: {:?}", club.name());
//!     }
//!
//!     // Top 10 players, in rank order
//!     let top = client.get_top_players(TopPlayersQuery::new().count(10)).await?;
//!     println!("Leader: {:?}", top.first().and_then(|p| p.name()));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`tag`] validates and cleans player/club tags.
//! - [`Transport`] is the injectable HTTP fetch capability;
//!   [`ReqwestTransport`] is the default.
//! - [`mapper`] wraps raw JSON records into [`Player`] and [`Club`] values
//!   that borrow the [`BrawlClient`] that produced them.
//! - [`BrawlClient`] exposes one method per endpoint.
//!
//! # Configuration
//!
//! [`BrawlClient::from_env`] reads:
//!
//! - `BRAWLAPI_TOKEN` (required) - Your BrawlAPI authorization token
//! - `BRAWLAPI_URL` (optional) - Base URL (defaults to `https://api.brawlapi.cf/api`)

pub mod cli;
mod client;
mod error;
pub mod mapper;
mod models;
pub mod output;
pub mod tag;
mod transport;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{BrawlClient, ClientBuilder, DEFAULT_API_URL};
pub use error::{BrawlError, Result, TransportError};
pub use tag::Tag;
pub use transport::{Query, ReqwestTransport, Transport, DEFAULT_TIMEOUT};

// Re-export models
pub use mapper::Resource;
pub use models::{Club, Count, Player, TopPlayersQuery};
