//! Club model.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::{str_field, u64_field};
use crate::client::BrawlClient;
use crate::error::Result;
use crate::mapper::Resource;

/// A club as returned by the `club`, `clubSearch` and
/// `leaderboards/clubs` endpoints.
#[derive(Clone)]
pub struct Club<'c> {
    raw: Value,
    client: &'c BrawlClient,
}

impl<'c> Resource<'c> for Club<'c> {
    fn from_raw(client: &'c BrawlClient, raw: Value) -> Self {
        Self { raw, client }
    }
}

impl<'c> Club<'c> {
    /// The club tag as returned by the API.
    pub fn tag(&self) -> Option<&str> {
        str_field(&self.raw, "tag")
    }

    /// The club name.
    pub fn name(&self) -> Option<&str> {
        str_field(&self.raw, "name")
    }

    /// Total club trophies.
    pub fn trophies(&self) -> Option<u64> {
        u64_field(&self.raw, "trophies")
    }

    /// The club description.
    pub fn description(&self) -> Option<&str> {
        str_field(&self.raw, "description")
    }

    /// Leaderboard rank, present on leaderboard entries only.
    pub fn rank(&self) -> Option<u64> {
        u64_field(&self.raw, "rank")
    }

    /// Number of members.
    ///
    /// Leaderboard and search entries carry `membersCount`; full club records
    /// carry the `members` list instead.
    pub fn member_count(&self) -> Option<u64> {
        u64_field(&self.raw, "membersCount").or_else(|| {
            self.raw
                .get("members")
                .and_then(Value::as_array)
                .map(|m| m.len() as u64)
        })
    }

    /// Tags of the listed members, in the order returned by the API.
    pub fn member_tags(&self) -> Vec<&str> {
        self.raw
            .get("members")
            .and_then(Value::as_array)
            .map(|members| members.iter().filter_map(|m| str_field(m, "tag")).collect())
            .unwrap_or_default()
    }

    /// Look up an arbitrary field of the raw record.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.raw.get(field)
    }

    /// The raw JSON record.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consume the club, returning the raw JSON record.
    pub fn into_raw(self) -> Value {
        self.raw
    }

    /// The client that fetched this club.
    pub fn client(&self) -> &'c BrawlClient {
        self.client
    }

    /// Fetch a fresh copy of this club.
    pub async fn refresh(&self) -> Result<Club<'c>> {
        self.client.get_club(self.tag().unwrap_or_default()).await
    }

    /// Search for clubs with the same name.
    pub async fn search_similar(&self) -> Result<Vec<Club<'c>>> {
        self.client.club_search(self.name().unwrap_or_default()).await
    }
}

impl fmt::Debug for Club<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Club").field("raw", &self.raw).finish_non_exhaustive()
    }
}

impl Serialize for Club<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}
