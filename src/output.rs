//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Club, Player};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Player<'_> {
    fn pretty_print(&self) -> String {
        let header = format!("Player: {}", self.name().unwrap_or("<unnamed>"));
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider];

        if let Some(tag) = self.tag() {
            lines.push(format!("Tag:            {}", tag));
        }

        if let Some(trophies) = self.trophies() {
            match self.highest_trophies() {
                Some(best) => lines.push(format!("Trophies:       {} (best {})", trophies, best)),
                None => lines.push(format!("Trophies:       {}", trophies)),
            }
        }

        if let Some(level) = self.exp_level() {
            lines.push(format!("Level:          {}", level));
        }

        if let Some(club) = self.club_tag() {
            lines.push(format!("Club:           {}", club));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Club<'_> {
    fn pretty_print(&self) -> String {
        let header = format!("Club: {}", self.name().unwrap_or("<unnamed>"));
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider];

        if let Some(tag) = self.tag() {
            lines.push(format!("Tag:            {}", tag));
        }

        if let Some(trophies) = self.trophies() {
            lines.push(format!("Trophies:       {}", trophies));
        }

        if let Some(members) = self.member_count() {
            lines.push(format!("Members:        {}", members));
        }

        if let Some(description) = self.description().filter(|d| !d.is_empty()) {
            lines.push(format!("Description:    {}", description));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::wrap_one;
    use crate::BrawlClient;

    #[test]
    fn test_player_pretty_print_format() {
        let client = BrawlClient::new("token").unwrap();
        let player: Player<'_> = wrap_one(
            &client,
            serde_json::json!({
                "tag": "#2PP",
                "name": "Shelly",
                "trophies": 1200,
                "highestTrophies": 1500
            }),
        );

        let output = player.pretty_print();
        assert!(output.starts_with("Player: Shelly"));
        assert!(output.contains("Tag:            #2PP"));
        assert!(output.contains("1200 (best 1500)"));
        assert!(!output.contains("Club:"));
    }

    #[test]
    fn test_club_pretty_print_skips_empty_description() {
        let client = BrawlClient::new("token").unwrap();
        let club: Club<'_> = wrap_one(
            &client,
            serde_json::json!({ "tag": "#QGY0", "name": "Band", "description": "" }),
        );

        let output = club.pretty_print();
        assert!(output.starts_with("Club: Band"));
        assert!(!output.contains("Description:"));
    }
}
