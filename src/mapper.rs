//! Conversion of raw API records into domain objects.

use serde_json::Value;

use crate::client::BrawlClient;

/// A domain object built from one raw API record.
///
/// Implementors keep the record and a borrowed reference to the client that
/// produced it. The reference never extends the client's lifetime.
pub trait Resource<'c>: Sized {
    /// Wrap `raw`, capturing `client` as the back-reference.
    fn from_raw(client: &'c BrawlClient, raw: Value) -> Self;
}

/// Wrap a single record.
pub fn wrap_one<'c, R: Resource<'c>>(client: &'c BrawlClient, raw: Value) -> R {
    R::from_raw(client, raw)
}

/// Wrap every record of `raw`, preserving the API's order.
pub fn wrap_many<'c, R: Resource<'c>>(client: &'c BrawlClient, raw: Vec<Value>) -> Vec<R> {
    raw.into_iter().map(|r| wrap_one(client, r)).collect()
}
