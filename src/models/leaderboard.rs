//! Leaderboard query parameters.

use std::str::FromStr;

use crate::error::{BrawlError, Result};

/// Number of leaderboard entries to request.
///
/// Counts are numeric by construction; use the [`FromStr`] impl to turn
/// user input into a count, which rejects non-numeric text with
/// [`BrawlError::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count(pub u32);

impl FromStr for Count {
    type Err = BrawlError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map(Count)
            .map_err(|_| BrawlError::InvalidArgument(format!("count must be numeric, got '{s}'")))
    }
}

impl From<u32> for Count {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

impl From<Count> for u32 {
    fn from(c: Count) -> Self {
        c.0
    }
}

/// Query for the `leaderboards/players` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopPlayersQuery {
    /// Number of entries to return. Server default when `None`.
    pub count: Option<u32>,

    /// Restrict the leaderboard to a single brawler (name or id).
    pub brawler: Option<String>,
}

impl TopPlayersQuery {
    /// Create an empty query (global leaderboard, server default count).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of entries.
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the number of entries from user input.
    ///
    /// # Errors
    ///
    /// Returns [`BrawlError::InvalidArgument`] if `count` is not numeric.
    pub fn with_count_str(mut self, count: &str) -> Result<Self> {
        let Count(n) = count.parse()?;
        self.count = Some(n);
        Ok(self)
    }

    /// Restrict the leaderboard to one brawler.
    #[must_use]
    pub fn brawler(mut self, brawler: impl Into<String>) -> Self {
        self.brawler = Some(brawler.into());
        self
    }
}
