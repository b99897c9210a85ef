//! BrawlAPI client.
//!
//! [`BrawlClient`] is the public API surface. Each endpoint method validates
//! its input, issues exactly one request through the configured
//! [`Transport`] and wraps the response into domain objects.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::error::{BrawlError, Result};
use crate::mapper;
use crate::models::{Club, Player, TopPlayersQuery};
use crate::tag::Tag;
use crate::transport::{Query, Record, ReqwestTransport, Requester, Transport, DEFAULT_TIMEOUT};

/// Default base URL of the BrawlAPI.
pub const DEFAULT_API_URL: &str = "https://api.brawlapi.cf/api";

/// BrawlAPI client.
///
/// Holds the authorization token and transport configuration, both fixed at
/// construction. The client has no mutable state, so it can be shared
/// across tasks and used concurrently. Clones share the same transport.
///
/// # Example
///
/// ```no_run
/// use brawlapi::BrawlClient;
///
/// # async fn example() -> brawlapi::Result<()> {
/// let client = BrawlClient::new("your-token")?;
///
/// let player = client.get_player("#2PP").await?;
/// println!("{:?} has {:?} trophies", player.name(), player.trophies());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BrawlClient {
    requester: Requester,
}

impl std::fmt::Debug for BrawlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrawlClient")
            .field("base_url", &self.requester.base_url().as_str())
            .finish_non_exhaustive()
    }
}

impl BrawlClient {
    /// Create a client for the default API URL.
    ///
    /// # Errors
    ///
    /// Returns [`BrawlError::Configuration`] if `token` is empty.
    pub fn new(token: &str) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Create a client from environment variables.
    ///
    /// Uses `BRAWLAPI_TOKEN` for authentication and optionally `BRAWLAPI_URL`
    /// for the base URL (defaults to [`DEFAULT_API_URL`]).
    ///
    /// # Errors
    ///
    /// Returns an error if `BRAWLAPI_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("BRAWLAPI_TOKEN").map_err(|_| {
            BrawlError::Configuration("BRAWLAPI_TOKEN environment variable not set".to_string())
        })?;

        let mut builder = Self::builder(token);
        if let Ok(base_url) = env::var("BRAWLAPI_URL") {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// Start configuring a client.
    pub fn builder(token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(token)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        self.requester.base_url()
    }

    /// Fetch a player profile by tag.
    ///
    /// # Errors
    ///
    /// Returns [`BrawlError::InvalidTag`] without making a request if the tag
    /// is malformed.
    #[tracing::instrument(skip(self))]
    pub async fn get_player(&self, tag: &str) -> Result<Player<'_>> {
        let tag = Tag::parse(tag)?;
        let query = Query::new().with("tag", tag.as_str());
        let raw: Record = self.requester.request("player", &query).await?;
        Ok(mapper::wrap_one(self, Value::Object(raw)))
    }

    /// Fetch a club by tag.
    ///
    /// # Errors
    ///
    /// Returns [`BrawlError::InvalidTag`] without making a request if the tag
    /// is malformed.
    #[tracing::instrument(skip(self))]
    pub async fn get_club(&self, tag: &str) -> Result<Club<'_>> {
        let tag = Tag::parse(tag)?;
        let query = Query::new().with("tag", tag.as_str());
        let raw: Record = self.requester.request("club", &query).await?;
        Ok(mapper::wrap_one(self, Value::Object(raw)))
    }

    /// Fetch the player leaderboard, in rank order.
    #[tracing::instrument(skip(self))]
    pub async fn get_top_players(&self, query: TopPlayersQuery) -> Result<Vec<Player<'_>>> {
        let query = Query::new()
            .with_opt("count", query.count)
            .with_opt("brawler", query.brawler);
        let raw: Vec<Value> = self.requester.request("leaderboards/players", &query).await?;
        Ok(mapper::wrap_many(self, raw))
    }

    /// Fetch the club leaderboard, in rank order.
    #[tracing::instrument(skip(self))]
    pub async fn get_top_clubs(&self, count: Option<u32>) -> Result<Vec<Club<'_>>> {
        let query = Query::new().with_opt("count", count);
        let raw: Vec<Value> = self.requester.request("leaderboards/clubs", &query).await?;
        Ok(mapper::wrap_many(self, raw))
    }

    /// Fetch the upcoming event rotation.
    pub async fn get_upcoming_events(&self) -> Result<Value> {
        self.events("upcoming").await
    }

    /// Fetch the current event rotation.
    pub async fn get_current_events(&self) -> Result<Value> {
        self.events("current").await
    }

    #[tracing::instrument(skip(self))]
    async fn events(&self, kind: &str) -> Result<Value> {
        self.requester
            .request("events", &Query::new().with("type", kind))
            .await
    }

    /// Fetch miscellaneous game data (season end times, shop refresh, ...).
    #[tracing::instrument(skip(self))]
    pub async fn get_misc(&self) -> Result<Value> {
        self.requester.request("misc", &Query::new()).await
    }

    /// List the endpoint names exposed by the API.
    #[tracing::instrument(skip(self))]
    pub async fn get_endpoints(&self) -> Result<Vec<String>> {
        self.requester.request("", &Query::new()).await
    }

    /// Search clubs by name.
    #[tracing::instrument(skip(self))]
    pub async fn club_search(&self, query: &str) -> Result<Vec<Club<'_>>> {
        let query = Query::new().with("name", query);
        let raw: Vec<Value> = self.requester.request("clubSearch", &query).await?;
        Ok(mapper::wrap_many(self, raw))
    }

    /// Fetch information about the API itself.
    #[tracing::instrument(skip(self))]
    pub async fn about(&self) -> Result<Value> {
        self.requester.request("about", &Query::new()).await
    }
}

/// Builder for [`BrawlClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use brawlapi::BrawlClient;
///
/// # fn example() -> brawlapi::Result<()> {
/// let client = BrawlClient::builder("your-token")
///     .base_url("http://localhost:8080/api")
///     .timeout(Duration::from_secs(5))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    token: String,
    base_url: String,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

impl ClientBuilder {
    fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }

    /// Override the base URL (e.g. `https://api.brawlapi.cf/api`).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Request timeout for the default transport.
    ///
    /// Ignored when a custom transport is supplied.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom transport instead of the default `reqwest` one.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`BrawlError::Configuration`] if the token is empty, the base
    /// URL is invalid, or the default transport cannot be created.
    pub fn build(self) -> Result<BrawlClient> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(BrawlError::Configuration(
                "an authorization token is required".to_string(),
            ));
        }

        // Ensure base URL ends with / so endpoints join beneath it
        let base_url_str = if self.base_url.ends_with('/') {
            self.base_url
        } else {
            format!("{}/", self.base_url)
        };
        let base_url = Url::parse(&base_url_str).map_err(|e| {
            BrawlError::Configuration(format!("invalid base URL '{base_url_str}': {e}"))
        })?;

        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(
                ReqwestTransport::with_timeout(self.timeout)
                    .map_err(|e| BrawlError::Configuration(e.to_string()))?,
            ),
        };

        Ok(BrawlClient {
            requester: Requester::new(base_url, token, transport)?,
        })
    }
}
