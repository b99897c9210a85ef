//! Basic example demonstrating the BrawlAPI client.
//!
//! Run with:
//! ```
//! BRAWLAPI_TOKEN=your-token cargo run --example basic -- '#2PP'
//! ```

use brawlapi::{BrawlClient, TopPlayersQuery};

#[tokio::main]
async fn main() -> brawlapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let tag = std::env::args().nth(1).unwrap_or_else(|| "#2PP".to_string());

    println!("Creating BrawlAPI client...");
    let client = BrawlClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    println!("\n--- Player {tag} ---");
    let player = client.get_player(&tag).await?;
    println!("  Name: {}", player.name().unwrap_or("unknown"));
    println!("  Trophies: {:?}", player.trophies());

    // Follow-up call through the player's back-reference
    match player.club().await? {
        Some(club) => {
            println!("\n--- Club {} ---", club.tag().unwrap_or("?"));
            println!("  Name: {}", club.name().unwrap_or("unknown"));
            println!("  Members: {:?}", club.member_count());
        }
        None => println!("  (not in a club)"),
    }

    println!("\n--- Top 5 Players ---");
    let top = client.get_top_players(TopPlayersQuery::new().count(5)).await?;
    for (i, p) in top.iter().enumerate() {
        println!(
            "  {}. {} ({} trophies)",
            i + 1,
            p.name().unwrap_or("unknown"),
            p.trophies().unwrap_or(0)
        );
    }

    println!("\n--- Current Events ---");
    let events = client.get_current_events().await?;
    println!("{}", serde_json::to_string_pretty(&events).unwrap_or_default());

    println!("\nDone!");
    Ok(())
}
