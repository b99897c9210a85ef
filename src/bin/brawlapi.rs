//! BrawlAPI CLI binary.
//!
//! A command-line interface for querying the BrawlAPI.

use brawlapi::cli::{Board, Cli, CliError, Command, EventTime};
use brawlapi::output::PrettyPrint;
use brawlapi::{BrawlClient, Club, Player, TopPlayersQuery};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match BrawlClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set BRAWLAPI_TOKEN environment variable");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

type CliResult = Result<(), CliError>;

async fn run(client: &BrawlClient, cli: Cli) -> CliResult {
    let json = cli.json;
    match cli.command {
        Command::Player { tag } => {
            let player = client.get_player(&tag).await?;
            output_single(&player, json)
        }
        Command::Club { tag } => {
            let club = client.get_club(&tag).await?;
            output_single(&club, json)
        }
        Command::Top {
            board: Board::Players { count, brawler },
        } => {
            let players = client
                .get_top_players(TopPlayersQuery { count, brawler })
                .await?;
            output_list(&players, json, |p| PlayerRow::from(p))
        }
        Command::Top {
            board: Board::Clubs { count },
        } => {
            let clubs = client.get_top_clubs(count).await?;
            output_list(&clubs, json, |c| ClubRow::from(c))
        }
        Command::Events { when } => {
            let events = match when {
                EventTime::Current => client.get_current_events().await?,
                EventTime::Upcoming => client.get_upcoming_events().await?,
            };
            output_raw(&events)
        }
        Command::Search { query } => {
            let clubs = client.club_search(&query).await?;
            output_list(&clubs, json, |c| ClubRow::from(c))
        }
        Command::Misc => output_raw(&client.get_misc().await?),
        Command::About => output_raw(&client.about().await?),
        Command::Endpoints => {
            let endpoints = client.get_endpoints().await?;
            if json {
                output_raw(&endpoints)
            } else {
                for endpoint in endpoints {
                    println!("{endpoint}");
                }
                Ok(())
            }
        }
    }
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> CliResult {
    if json {
        output_raw(item)
    } else {
        println!("{}", item.pretty_print());
        Ok(())
    }
}

fn output_list<T, R, F>(items: &[T], json: bool, to_row: F) -> CliResult
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        output_raw(items)
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        Ok(())
    }
}

fn output_raw<T: Serialize + ?Sized>(value: &T) -> CliResult {
    let text = serde_json::to_string_pretty(value)?;
    println!("{text}");
    Ok(())
}

// Table row types for non-JSON output

fn display<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[derive(Tabled)]
struct PlayerRow {
    rank: String,
    tag: String,
    name: String,
    trophies: String,
}

impl From<&Player<'_>> for PlayerRow {
    fn from(p: &Player<'_>) -> Self {
        Self {
            rank: display(p.rank()),
            tag: display(p.tag()),
            name: display(p.name()),
            trophies: display(p.trophies()),
        }
    }
}

#[derive(Tabled)]
struct ClubRow {
    rank: String,
    tag: String,
    name: String,
    trophies: String,
    members: String,
}

impl From<&Club<'_>> for ClubRow {
    fn from(c: &Club<'_>) -> Self {
        Self {
            rank: display(c.rank()),
            tag: display(c.tag()),
            name: display(c.name()),
            trophies: display(c.trophies()),
            members: display(c.member_count()),
        }
    }
}
