//! CLI argument parsing tests.

use clap::error::ErrorKind;
use clap::Parser;
use brawlapi::cli::{Board, Cli, Command, EventTime};

#[test]
fn test_cli_parses_player_subcommand() {
    let cli = Cli::parse_from(["brawlapi", "player", "#2PP"]);

    assert!(!cli.json);
    match cli.command {
        Command::Player { tag } => assert_eq!(tag, "#2PP"),
        _ => panic!("Expected Player command"),
    }
}

#[test]
fn test_cli_parses_top_players_with_options() {
    let cli = Cli::parse_from([
        "brawlapi", "top", "players", "--count", "10", "--brawler", "shelly",
    ]);

    match cli.command {
        Command::Top {
            board: Board::Players { count, brawler },
        } => {
            assert_eq!(count, Some(10));
            assert_eq!(brawler.as_deref(), Some("shelly"));
        }
        _ => panic!("Expected Top players command"),
    }
}

#[test]
fn test_cli_board_alias() {
    let cli = Cli::parse_from(["brawlapi", "top", "club"]);

    match cli.command {
        Command::Top { board } => assert_eq!(board, Board::Clubs { count: None }),
        _ => panic!("Expected Top command"),
    }
}

#[test]
fn test_cli_top_clubs_accepts_count() {
    let cli = Cli::parse_from(["brawlapi", "top", "clubs", "--count", "5"]);

    match cli.command {
        Command::Top { board } => assert_eq!(board, Board::Clubs { count: Some(5) }),
        _ => panic!("Expected Top command"),
    }
}

#[test]
fn test_cli_rejects_brawler_for_club_leaderboard() {
    let result = Cli::try_parse_from(["brawlapi", "top", "clubs", "--brawler", "shelly"]);

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    assert!(err.to_string().contains("--brawler"));
}

#[test]
fn test_cli_rejects_non_numeric_count() {
    let result = Cli::try_parse_from(["brawlapi", "top", "players", "--count", "abc"]);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("count must be numeric"));
}

#[test]
fn test_cli_events_default_to_current() {
    let cli = Cli::parse_from(["brawlapi", "events"]);
    match cli.command {
        Command::Events { when } => assert_eq!(when, EventTime::Current),
        _ => panic!("Expected Events command"),
    }

    let cli = Cli::parse_from(["brawlapi", "events", "upcoming"]);
    match cli.command {
        Command::Events { when } => assert_eq!(when, EventTime::Upcoming),
        _ => panic!("Expected Events command"),
    }
}

#[test]
fn test_cli_global_json_flag() {
    let cli = Cli::parse_from(["brawlapi", "search", "band", "--json"]);

    assert!(cli.json);
    match cli.command {
        Command::Search { query } => assert_eq!(query, "band"),
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_cli_unit_subcommands() {
    assert!(matches!(Cli::parse_from(["brawlapi", "misc"]).command, Command::Misc));
    assert!(matches!(Cli::parse_from(["brawlapi", "about"]).command, Command::About));
    assert!(matches!(
        Cli::parse_from(["brawlapi", "endpoints"]).command,
        Command::Endpoints
    ));
}
