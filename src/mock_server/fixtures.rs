//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use serde_json::{json, Value};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Player Fixtures
    // =========================================================================

    /// Create a minimal player record.
    pub fn player(tag: &str, name: &str, trophies: u64) -> Value {
        json!({
            "tag": tag,
            "name": name,
            "trophies": trophies,
            "highestTrophies": trophies,
            "expLevel": 100,
        })
    }

    /// Create a player record that belongs to a club.
    pub fn player_in_club(tag: &str, name: &str, trophies: u64, club_tag: &str, club_name: &str) -> Value {
        let mut player = Self::player(tag, name, trophies);
        player["club"] = json!({ "tag": club_tag, "name": club_name });
        player
    }

    /// Create a leaderboard entry for a player.
    pub fn ranked_player(rank: u64, tag: &str, name: &str, trophies: u64) -> Value {
        json!({
            "rank": rank,
            "tag": tag,
            "name": name,
            "trophies": trophies,
        })
    }

    // =========================================================================
    // Club Fixtures
    // =========================================================================

    /// Create a full club record with the given member tags.
    pub fn club(tag: &str, name: &str, trophies: u64, members: &[&str]) -> Value {
        let members: Vec<Value> = members
            .iter()
            .map(|m| json!({ "tag": m, "role": "member" }))
            .collect();
        json!({
            "tag": tag,
            "name": name,
            "description": format!("{name} official club"),
            "trophies": trophies,
            "requiredTrophies": 0,
            "members": members,
        })
    }

    /// Create a leaderboard entry for a club.
    pub fn ranked_club(rank: u64, tag: &str, name: &str, trophies: u64, members: u64) -> Value {
        json!({
            "rank": rank,
            "tag": tag,
            "name": name,
            "trophies": trophies,
            "membersCount": members,
        })
    }

    // =========================================================================
    // Event Fixtures
    // =========================================================================

    /// Create an event rotation with one slot per mode.
    pub fn event_rotation(modes: &[&str]) -> Value {
        let slots: Vec<Value> = modes
            .iter()
            .enumerate()
            .map(|(i, mode)| json!({ "slot": i + 1, "mode": mode, "map": format!("{mode} Arena") }))
            .collect();
        json!(slots)
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// The scenario served by [`MockServer::start`](super::MockServer::start).
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario {
            players: vec![
                Self::player_in_club("#2PP", "Shelly Main", 31000, "#QGY0", "Band of Brawlers"),
                Self::player_in_club("#YQ2", "Bull Rush", 24000, "#QGY0", "Band of Brawlers"),
                Self::player("#9LJRCU8V", "Colt Fan", 28000),
            ],
            clubs: vec![
                Self::club("#QGY0", "Band of Brawlers", 55000, &["#2PP", "#YQ2"]),
                Self::club("#JCUV", "Gem Grabbers", 91000, &["#8GG", "#2RR", "#PUV"]),
            ],
            top_players: vec![
                Self::ranked_player(1, "#2PP", "Shelly Main", 31000),
                Self::ranked_player(2, "#9LJRCU8V", "Colt Fan", 28000),
                Self::ranked_player(3, "#YQ2", "Bull Rush", 24000),
            ],
            brawler_leaderboards: vec![(
                "shelly".to_string(),
                vec![Self::ranked_player(1, "#2PP", "Shelly Main", 1250)],
            )],
            top_clubs: vec![
                Self::ranked_club(1, "#JCUV", "Gem Grabbers", 91000, 3),
                Self::ranked_club(2, "#QGY0", "Band of Brawlers", 55000, 2),
            ],
            current_events: Self::event_rotation(&["Gem Grab", "Showdown", "Brawl Ball"]),
            upcoming_events: Self::event_rotation(&["Heist", "Bounty"]),
            misc: json!({
                "timeUntilSeasonEndInSeconds": 86400,
                "timeUntilShopResetInSeconds": 3600,
            }),
            about: json!({
                "name": "BrawlAPI mock",
                "version": env!("CARGO_PKG_VERSION"),
            }),
            endpoints: [
                "player",
                "club",
                "about",
                "leaderboards/players",
                "leaderboards/clubs",
                "events",
                "misc",
                "clubSearch",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// A complete set of fixture data for populating [`MockState`](super::MockState).
#[derive(Debug, Clone)]
pub struct DefaultScenario {
    pub players: Vec<Value>,
    pub clubs: Vec<Value>,
    pub top_players: Vec<Value>,
    pub brawler_leaderboards: Vec<(String, Vec<Value>)>,
    pub top_clubs: Vec<Value>,
    pub current_events: Value,
    pub upcoming_events: Value,
    pub misc: Value,
    pub about: Value,
    pub endpoints: Vec<String>,
}
