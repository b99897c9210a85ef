//! Mock server state management.
//!
//! Provides the in-memory data store for the mock BrawlAPI server.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::tag;

/// Shared state for the mock server.
///
/// Records are stored as raw JSON, exactly as the API returns them.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Player records indexed by cleaned tag (e.g. "2PP").
    pub players: HashMap<String, Value>,

    /// Club records indexed by cleaned tag.
    pub clubs: HashMap<String, Value>,

    /// Global player leaderboard, in rank order.
    pub top_players: Vec<Value>,

    /// Per-brawler player leaderboards, indexed by lowercase brawler name.
    pub brawler_leaderboards: HashMap<String, Vec<Value>>,

    /// Club leaderboard, in rank order.
    pub top_clubs: Vec<Value>,

    /// Current event rotation.
    pub current_events: Value,

    /// Upcoming event rotation.
    pub upcoming_events: Value,

    /// Miscellaneous game data.
    pub misc: Value,

    /// API information.
    pub about: Value,

    /// Endpoint names served by the discovery endpoint.
    pub endpoints: Vec<String>,

    /// Optional authentication token. If set, requests must include this token.
    pub required_token: Option<String>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a player record. The record's `tag` field is used as the key.
    pub fn with_player(mut self, player: Value) -> Self {
        if let Some(key) = record_key(&player) {
            self.players.insert(key, player);
        }
        self
    }

    /// Add a club record. The record's `tag` field is used as the key.
    pub fn with_club(mut self, club: Value) -> Self {
        if let Some(key) = record_key(&club) {
            self.clubs.insert(key, club);
        }
        self
    }

    /// Set the global player leaderboard.
    pub fn with_top_players(mut self, entries: Vec<Value>) -> Self {
        self.top_players = entries;
        self
    }

    /// Set the leaderboard for one brawler.
    pub fn with_brawler_leaderboard(mut self, brawler: &str, entries: Vec<Value>) -> Self {
        self.brawler_leaderboards
            .insert(brawler.to_lowercase(), entries);
        self
    }

    /// Set the club leaderboard.
    pub fn with_top_clubs(mut self, entries: Vec<Value>) -> Self {
        self.top_clubs = entries;
        self
    }

    /// Set both event rotations.
    pub fn with_events(mut self, current: Value, upcoming: Value) -> Self {
        self.current_events = current;
        self.upcoming_events = upcoming;
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Returns true if a request carrying `token` may proceed.
    pub fn is_authorized(&self, token: Option<&str>) -> bool {
        match &self.required_token {
            Some(required) => token == Some(required.as_str()),
            None => true,
        }
    }

    /// Get a player by tag, in any accepted spelling.
    pub fn get_player(&self, tag: &str) -> Option<&Value> {
        self.players.get(&tag::clean(tag))
    }

    /// Get a club by tag, in any accepted spelling.
    pub fn get_club(&self, tag: &str) -> Option<&Value> {
        self.clubs.get(&tag::clean(tag))
    }

    /// Player leaderboard, optionally for one brawler, truncated to `count`.
    ///
    /// Returns `None` for an unknown brawler.
    pub fn top_players(&self, count: Option<usize>, brawler: Option<&str>) -> Option<Vec<&Value>> {
        let entries = match brawler {
            Some(name) => self.brawler_leaderboards.get(&name.to_lowercase())?,
            None => &self.top_players,
        };
        Some(take(entries, count))
    }

    /// Club leaderboard truncated to `count`.
    pub fn top_clubs(&self, count: Option<usize>) -> Vec<&Value> {
        take(&self.top_clubs, count)
    }

    /// Clubs whose name contains `name` (case-insensitive), highest trophies first.
    pub fn search_clubs(&self, name: &str) -> Vec<&Value> {
        let needle = name.to_lowercase();
        let mut matches: Vec<&Value> = self
            .clubs
            .values()
            .filter(|c| {
                c.get("name")
                    .and_then(Value::as_str)
                    .map(|n| n.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .collect();
        matches.sort_by_key(|c| std::cmp::Reverse(c.get("trophies").and_then(Value::as_u64)));
        matches
    }
}

fn record_key(record: &Value) -> Option<String> {
    record.get("tag").and_then(Value::as_str).map(tag::clean)
}

fn take(entries: &[Value], count: Option<usize>) -> Vec<&Value> {
    entries.iter().take(count.unwrap_or(usize::MAX)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_add_and_get_player_by_any_spelling() {
        let state = MockState::new().with_player(json!({ "tag": "#2PP", "name": "Shelly" }));

        for spelling in ["#2PP", "2pp", "#2pp"] {
            let player = state.get_player(spelling).expect(spelling);
            assert_eq!(player["name"], "Shelly");
        }
        assert!(state.get_player("#9LJ").is_none());
    }

    #[test]
    fn test_state_top_players_truncates_and_filters_by_brawler() {
        let state = MockState::new()
            .with_top_players(vec![json!({ "tag": "#A" }), json!({ "tag": "#B" })])
            .with_brawler_leaderboard("Shelly", vec![json!({ "tag": "#C" })]);

        assert_eq!(state.top_players(None, None).unwrap().len(), 2);
        assert_eq!(state.top_players(Some(1), None).unwrap()[0]["tag"], "#A");
        assert_eq!(state.top_players(None, Some("shelly")).unwrap()[0]["tag"], "#C");
        assert!(state.top_players(None, Some("nobody")).is_none());
    }

    #[test]
    fn test_state_search_clubs() {
        let state = MockState::new()
            .with_club(json!({ "tag": "#QGY0", "name": "Band of Brawlers", "trophies": 10 }))
            .with_club(json!({ "tag": "#JCUV", "name": "Brawl Gang", "trophies": 20 }))
            .with_club(json!({ "tag": "#PYL", "name": "Gem Grabbers", "trophies": 30 }));

        let found = state.search_clubs("brawl");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0]["tag"], "#JCUV");
        assert_eq!(found[1]["tag"], "#QGY0");
    }

    #[test]
    fn test_state_authorization() {
        let open = MockState::new();
        assert!(open.is_authorized(None));

        let locked = MockState::new().with_required_token("secret");
        assert!(locked.is_authorized(Some("secret")));
        assert!(!locked.is_authorized(Some("wrong")));
        assert!(!locked.is_authorized(None));
    }
}
