//! HTTP transport layer.
//!
//! [`Transport`] is the injectable fetch capability: given a URL, a query
//! and headers it returns the parsed JSON body. [`ReqwestTransport`] is the
//! default implementation. The crate-internal `Requester` adds the base URL,
//! the `Authorization` header and envelope unwrapping on top of it.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::error::{BrawlError, Result, TransportError};

/// Default request timeout for [`ReqwestTransport`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("brawlapi/", env!("CARGO_PKG_VERSION"));

/// Query parameters for a single request.
///
/// Keys whose value renders as an empty string are never stored, so they
/// are absent from the request rather than sent as `key=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query(BTreeMap<String, String>);

impl Query {
    /// Create an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, skipping it if the value is empty.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter if present and non-empty.
    #[must_use]
    pub fn with_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Insert a parameter in place, skipping it if the value is empty.
    pub fn insert(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        if value.is_empty() {
            return;
        }
        self.0.insert(key.to_string(), value);
    }

    /// Look up a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parameters set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Injectable HTTP fetch capability.
///
/// Implementations perform exactly one GET per call and return the parsed
/// JSON body. Any failure (network, non-2xx status, malformed JSON) is
/// reported as a [`TransportError`]; implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` with the given query and headers.
    async fn fetch(
        &self,
        url: Url,
        query: &Query,
        headers: &HeaderMap,
    ) -> core::result::Result<Value, TransportError>;
}

/// Default [`Transport`] backed by `reqwest`.
///
/// Cheaply cloneable; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Create a transport with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> core::result::Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_timeout(timeout: Duration) -> core::result::Result<Self, TransportError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Wrap an existing `reqwest` client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> core::result::Result<Response, TransportError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        tracing::warn!(status = status.as_u16(), url = %response.url(), "BrawlAPI request failed");
        let message = Self::extract_error_message(response, status).await;
        Err(TransportError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<Value>(&body) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(
        &self,
        url: Url,
        query: &Query,
        headers: &HeaderMap,
    ) -> core::result::Result<Value, TransportError> {
        let response = self
            .http
            .get(url)
            .headers(headers.clone())
            .query(query)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Response envelope: either `{"data": T, ...}` or the bare payload.
///
/// Sibling fields next to `data` (status, meta) are ignored. The payload
/// type picks the envelope per endpoint: a list endpoint only unwraps a
/// `data` array, a record endpoint only unwraps a `data` object, and a
/// pass-through `Value` endpoint unwraps `data` whenever it is present.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_payload(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(t) => t,
        }
    }
}

/// A player or club record as returned by the API.
pub(crate) type Record = Map<String, Value>;

/// Binds a [`Transport`] to the API base URL and credentials.
#[derive(Clone)]
pub(crate) struct Requester {
    base_url: Arc<Url>,
    headers: Arc<HeaderMap>,
    transport: Arc<dyn Transport>,
}

impl Requester {
    /// Build a requester. `base_url` must already end with `/`.
    pub(crate) fn new(base_url: Url, token: &str, transport: Arc<dyn Transport>) -> Result<Self> {
        let mut auth = HeaderValue::from_str(token).map_err(|_| {
            BrawlError::Configuration("token contains characters not allowed in a header".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        Ok(Self {
            base_url: Arc::new(base_url),
            headers: Arc::new(headers),
            transport,
        })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue one GET to `endpoint` and decode the envelope payload as `T`.
    #[tracing::instrument(skip(self))]
    pub(crate) async fn request<T: DeserializeOwned>(&self, endpoint: &str, query: &Query) -> Result<T> {
        let url = self.base_url.join(endpoint).map_err(TransportError::Url)?;
        tracing::debug!(%url, params = query.len(), "sending BrawlAPI request");

        let body = self.transport.fetch(url, query, &self.headers).await?;
        let envelope: Envelope<T> = serde_json::from_value(body).map_err(TransportError::Decode)?;
        Ok(envelope.into_payload())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_omits_empty_values() {
        let query = Query::new()
            .with("tag", "2PP")
            .with("brawler", "")
            .with_opt("count", None::<u32>)
            .with_opt("type", Some("upcoming"));

        assert_eq!(query.len(), 2);
        assert_eq!(query.get("tag"), Some("2PP"));
        assert_eq!(query.get("type"), Some("upcoming"));
        assert_eq!(query.get("brawler"), None);
        assert_eq!(query.get("count"), None);
    }

    #[test]
    fn test_query_accepts_numbers() {
        let query = Query::new().with("count", 25u32);
        assert_eq!(query.get("count"), Some("25"));
        assert_eq!(
            query.iter().collect::<Vec<_>>(),
            vec![("count", "25")]
        );
    }

    #[test]
    fn test_envelope_unwraps_data_field() {
        let env: Envelope<Vec<String>> =
            serde_json::from_value(json!({ "data": ["player", "club"] })).unwrap();
        assert_eq!(env.into_payload(), vec!["player", "club"]);
    }

    #[test]
    fn test_envelope_accepts_bare_payload() {
        let env: Envelope<Value> = serde_json::from_value(json!({ "tag": "#2PP" })).unwrap();
        assert_eq!(env.into_payload(), json!({ "tag": "#2PP" }));

        let env: Envelope<Vec<String>> = serde_json::from_value(json!(["player"])).unwrap();
        assert_eq!(env.into_payload(), vec!["player"]);
    }

    #[test]
    fn test_envelope_ignores_sibling_fields() {
        let env: Envelope<Vec<Value>> = serde_json::from_value(json!({
            "status": 200,
            "data": [{ "tag": "#2PP" }, { "tag": "#YQ2" }]
        }))
        .unwrap();
        assert_eq!(env.into_payload().len(), 2);

        let env: Envelope<Value> = serde_json::from_value(json!({
            "status": 200,
            "data": { "name": "BrawlAPI" }
        }))
        .unwrap();
        assert_eq!(env.into_payload(), json!({ "name": "BrawlAPI" }));
    }

    #[test]
    fn test_record_keeps_non_object_data_field() {
        let record = json!({ "data": 1, "tag": "#2PP" });
        let env: Envelope<Record> = serde_json::from_value(record.clone()).unwrap();
        assert_eq!(Value::Object(env.into_payload()), record);
    }

    #[test]
    fn test_record_unwraps_data_object() {
        let env: Envelope<Record> = serde_json::from_value(json!({
            "status": 200,
            "data": { "tag": "#2PP", "name": "Shelly Main" }
        }))
        .unwrap();
        let record = env.into_payload();
        assert_eq!(record.get("name"), Some(&json!("Shelly Main")));
        assert!(record.get("status").is_none());
    }

    #[test]
    fn test_list_rejects_data_object() {
        let result: core::result::Result<Envelope<Vec<Value>>, _> =
            serde_json::from_value(json!({ "data": { "tag": "#2PP" } }));
        assert!(result.is_err());
    }

    #[test]
    fn test_requester_rejects_unprintable_token() {
        let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new().unwrap());
        let base = Url::parse("https://api.brawlapi.cf/api/").unwrap();
        let result = Requester::new(base, "bad\ntoken", transport);
        assert!(matches!(result, Err(BrawlError::Configuration(_))));
    }
}
