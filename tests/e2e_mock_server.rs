//! E2E tests using the mock BrawlAPI server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use brawlapi::mock_server::{Fixtures, MockServer, MockState};
use brawlapi::{BrawlClient, BrawlError, TopPlayersQuery};

fn client_for(server: &MockServer) -> BrawlClient {
    BrawlClient::builder(MockServer::TOKEN)
        .base_url(server.url())
        .build()
        .unwrap()
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    // Both servers should have different URLs
    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_wrong_token_is_rejected() {
    let server = MockServer::start().await;
    let client = BrawlClient::builder("not-the-token")
        .base_url(server.url())
        .build()
        .unwrap();

    let err = client.get_player("#2PP").await.unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert!(err.to_string().contains("Invalid authorization token"));

    server.shutdown().await;
}

// =============================================================================
// Player / Club Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_player_to_club_workflow() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    // Step 1: Fetch a player by a sloppy spelling of the tag
    let player = client
        .get_player("2pp")
        .await
        .expect("Failed to get player");
    assert_eq!(player.name(), Some("Shelly Main"));

    // Step 2: Follow the back-reference to the player's club
    let club = player
        .club()
        .await
        .expect("Failed to get club")
        .expect("Player should be in a club");
    assert_eq!(club.tag(), Some("#QGY0"));
    assert!(club.member_tags().contains(&"#2PP"));

    // Step 3: Search for clubs with the same name
    let similar = club.search_similar().await.expect("Failed to search");
    assert_eq!(similar.len(), 1);
    assert_eq!(similar[0].tag(), Some("#QGY0"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_clubless_player_has_no_club() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let player = client.get_player("#9LJRCU8V").await.unwrap();

    assert!(player.club().await.unwrap().is_none());

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_player_is_not_found() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client.get_player("#PPPP").await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status_code(), Some(404));

    server.shutdown().await;
}

#[tokio::test]
async fn test_refresh_returns_same_record() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let club = client.get_club("#JCUV").await.unwrap();
    let refreshed = club.refresh().await.unwrap();

    assert_eq!(club.raw(), refreshed.raw());

    server.shutdown().await;
}

// =============================================================================
// Leaderboard Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_top_players_in_rank_order() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let players = client
        .get_top_players(TopPlayersQuery::new())
        .await
        .expect("Failed to get leaderboard");

    let ranks: Vec<_> = players.iter().filter_map(|p| p.rank()).collect();
    assert_eq!(ranks, vec![1, 2, 3]);

    let top_two = client
        .get_top_players(TopPlayersQuery::new().count(2))
        .await
        .unwrap();
    assert_eq!(top_two.len(), 2);

    server.shutdown().await;
}

#[tokio::test]
async fn test_brawler_leaderboard() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let shelly = client
        .get_top_players(TopPlayersQuery::new().brawler("Shelly"))
        .await
        .unwrap();
    assert_eq!(shelly.len(), 1);
    assert_eq!(shelly[0].trophies(), Some(1250));

    let err = client
        .get_top_players(TopPlayersQuery::new().brawler("Nobody"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    server.shutdown().await;
}

#[tokio::test]
async fn test_top_clubs_leader_then_details() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let clubs = client.get_top_clubs(Some(1)).await.unwrap();
    assert_eq!(clubs.len(), 1);

    let leader = clubs[0].refresh().await.unwrap();
    assert_eq!(leader.name(), Some("Gem Grabbers"));
    assert_eq!(leader.member_count(), Some(3));

    server.shutdown().await;
}

// =============================================================================
// Game Data Tests
// =============================================================================

#[tokio::test]
async fn test_events_misc_about_and_endpoints() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let current = client.get_current_events().await.unwrap();
    let upcoming = client.get_upcoming_events().await.unwrap();
    assert_eq!(current.as_array().map(Vec::len), Some(3));
    assert_eq!(upcoming.as_array().map(Vec::len), Some(2));
    assert_eq!(current[0]["mode"], "Gem Grab");

    let misc = client.get_misc().await.unwrap();
    assert!(misc.get("timeUntilSeasonEndInSeconds").is_some());

    let about = client.about().await.unwrap();
    assert_eq!(about["name"], "BrawlAPI mock");

    let endpoints = client.get_endpoints().await.unwrap();
    assert!(endpoints.iter().any(|e| e == "clubSearch"));

    server.shutdown().await;
}

// =============================================================================
// State Manipulation Tests
// =============================================================================

#[tokio::test]
async fn test_state_changes_are_visible() {
    let server = MockServer::with_state(MockState::new()).await;
    let client = client_for(&server);

    assert!(client.get_top_clubs(None).await.unwrap().is_empty());

    server
        .state()
        .write()
        .await
        .top_clubs
        .push(Fixtures::ranked_club(1, "#PYL", "Late Entry", 10, 1));

    let clubs = client.get_top_clubs(None).await.unwrap();
    assert_eq!(clubs[0].name(), Some("Late Entry"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_invalid_tag_fails_locally() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    assert!(matches!(
        client.get_club("#ABC").await,
        Err(BrawlError::InvalidTag(_))
    ));

    server.shutdown().await;
}
