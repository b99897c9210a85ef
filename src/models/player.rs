//! Player model.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::{str_field, u64_field};
use crate::client::BrawlClient;
use crate::error::Result;
use crate::mapper::Resource;
use crate::models::Club;

/// A player profile as returned by the `player` and
/// `leaderboards/players` endpoints.
///
/// Wraps the raw JSON record and keeps a borrowed reference to the client
/// that fetched it, so follow-up calls such as [`Player::club`] need no
/// extra arguments.
#[derive(Clone)]
pub struct Player<'c> {
    raw: Value,
    client: &'c BrawlClient,
}

impl<'c> Resource<'c> for Player<'c> {
    fn from_raw(client: &'c BrawlClient, raw: Value) -> Self {
        Self { raw, client }
    }
}

impl<'c> Player<'c> {
    /// The player tag as returned by the API (usually `#`-prefixed).
    pub fn tag(&self) -> Option<&str> {
        str_field(&self.raw, "tag")
    }

    /// The player's display name.
    pub fn name(&self) -> Option<&str> {
        str_field(&self.raw, "name")
    }

    /// Current trophy count.
    pub fn trophies(&self) -> Option<u64> {
        u64_field(&self.raw, "trophies")
    }

    /// Best trophy count ever reached.
    pub fn highest_trophies(&self) -> Option<u64> {
        u64_field(&self.raw, "highestTrophies")
    }

    /// Experience level.
    pub fn exp_level(&self) -> Option<u64> {
        u64_field(&self.raw, "expLevel")
    }

    /// Leaderboard rank, present on leaderboard entries only.
    pub fn rank(&self) -> Option<u64> {
        u64_field(&self.raw, "rank")
    }

    /// Tag of the club the player belongs to, if any.
    pub fn club_tag(&self) -> Option<&str> {
        self.raw.get("club").and_then(|c| str_field(c, "tag"))
    }

    /// Look up an arbitrary field of the raw record.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.raw.get(field)
    }

    /// The raw JSON record.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consume the player, returning the raw JSON record.
    pub fn into_raw(self) -> Value {
        self.raw
    }

    /// The client that fetched this player.
    pub fn client(&self) -> &'c BrawlClient {
        self.client
    }

    /// Fetch the club this player belongs to.
    ///
    /// Returns `Ok(None)` without a request if the player has no club.
    pub async fn club(&self) -> Result<Option<Club<'c>>> {
        match self.club_tag() {
            Some(tag) => self.client.get_club(tag).await.map(Some),
            None => Ok(None),
        }
    }

    /// Fetch a fresh copy of this player's profile.
    ///
    /// # Errors
    ///
    /// Returns [`BrawlError::InvalidTag`](crate::BrawlError::InvalidTag) if the
    /// record carries no usable tag.
    pub async fn refresh(&self) -> Result<Player<'c>> {
        self.client.get_player(self.tag().unwrap_or_default()).await
    }
}

impl fmt::Debug for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player").field("raw", &self.raw).finish_non_exhaustive()
    }
}

impl Serialize for Player<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_accessors() {
        let client = BrawlClient::new("token").unwrap();
        let player = Player::from_raw(
            &client,
            json!({
                "tag": "#2PP",
                "name": "Colt Main",
                "trophies": 31000,
                "highestTrophies": 32000,
                "expLevel": 250,
                "club": { "tag": "#QGY0", "name": "Band" }
            }),
        );

        assert_eq!(player.tag(), Some("#2PP"));
        assert_eq!(player.name(), Some("Colt Main"));
        assert_eq!(player.trophies(), Some(31000));
        assert_eq!(player.highest_trophies(), Some(32000));
        assert_eq!(player.exp_level(), Some(250));
        assert_eq!(player.club_tag(), Some("#QGY0"));
        assert_eq!(player.rank(), None);
        assert!(std::ptr::eq(player.client(), &client));
    }

    #[test]
    fn test_player_serializes_raw_record_only() {
        let client = BrawlClient::new("secret-token").unwrap();
        let player = Player::from_raw(&client, json!({ "tag": "#2PP" }));
        let serialized = serde_json::to_string(&player).unwrap();
        assert_eq!(serialized, r##"{"tag":"#2PP"}"##);
        assert!(!format!("{player:?}").contains("secret-token"));
    }

    #[tokio::test]
    async fn test_club_is_none_without_request_when_clubless() {
        let client = BrawlClient::new("token").unwrap();
        let player = Player::from_raw(&client, json!({ "tag": "#2PP", "club": {} }));
        assert!(player.club().await.unwrap().is_none());
    }
}
