//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the brawlapi binary.

use clap::{Parser, Subcommand, ValueEnum};

use crate::error::BrawlError;
use crate::models::Count;

/// Errors reported by the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The API call failed.
    #[error(transparent)]
    Api(#[from] BrawlError),

    /// The result could not be written as JSON.
    #[error("Failed to format output: {0}")]
    Output(#[from] serde_json::Error),
}

/// BrawlAPI command-line interface.
#[derive(Parser, Debug)]
#[command(name = "brawlapi", about = "BrawlAPI CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of human-readable text.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a player profile.
    Player {
        /// Player tag, with or without the leading '#'.
        tag: String,
    },

    /// Show a club.
    Club {
        /// Club tag, with or without the leading '#'.
        tag: String,
    },

    /// Show a leaderboard.
    Top {
        #[command(subcommand)]
        board: Board,
    },

    /// Show the event rotation.
    Events {
        /// Which rotation to show.
        #[arg(default_value = "current")]
        when: EventTime,
    },

    /// Search clubs by name.
    Search {
        /// Club name to search for.
        query: String,
    },

    /// Show miscellaneous game data.
    Misc,

    /// Show information about the API.
    About,

    /// List the API's endpoints.
    Endpoints,
}

/// Leaderboards that can be displayed.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Board {
    /// Top players, optionally for one brawler.
    #[command(alias = "player")]
    Players {
        /// Number of entries.
        #[arg(long, value_parser = parse_count)]
        count: Option<u32>,

        /// Restrict the leaderboard to one brawler.
        #[arg(long)]
        brawler: Option<String>,
    },

    /// Top clubs.
    #[command(alias = "club")]
    Clubs {
        /// Number of entries.
        #[arg(long, value_parser = parse_count)]
        count: Option<u32>,
    },
}

/// Event rotations.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum EventTime {
    /// Events running now.
    Current,
    /// Events starting next.
    Upcoming,
}

fn parse_count(s: &str) -> Result<u32, String> {
    s.parse::<Count>().map(u32::from).map_err(|e| e.to_string())
}
