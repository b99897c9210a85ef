//! Player and club tag validation.
//!
//! Tags are shown to users with a leading `#` (e.g. `#2PP`) but are sent to
//! the API without it. The API accepts any digit and the letters
//! `PYLQGRJCUV`; a letter `O` is always a mistyped zero.

use std::fmt;
use std::str::FromStr;

use crate::error::{BrawlError, Result};

/// Characters the API accepts in a cleaned tag, in addition to every ASCII digit.
pub const TAG_ALPHABET: &str = "0289PYLQGRJCUV";

/// Returns true if `tag` is a well-formed player or club tag.
///
/// One leading `#` is ignored, letters are compared case-insensitively and
/// `O` counts as `0`. Empty tags are rejected.
pub fn validate(tag: &str) -> bool {
    let body = strip_prefix(tag);
    !body.is_empty() && body.chars().map(normalize_char).all(is_tag_char)
}

/// Normalize a tag into the form the API expects.
///
/// Strips one leading `#`, uppercases letters and rewrites `O` to `0`.
/// The result is not validated; call [`validate`] first.
pub fn clean(tag: &str) -> String {
    strip_prefix(tag).chars().map(normalize_char).collect()
}

fn strip_prefix(tag: &str) -> &str {
    tag.strip_prefix('#').unwrap_or(tag)
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_digit() || TAG_ALPHABET.contains(c)
}

fn normalize_char(c: char) -> char {
    match c.to_ascii_uppercase() {
        'O' => '0',
        other => other,
    }
}

/// A validated, cleaned tag.
///
/// `Display` renders the user-facing form with a `#` prefix, while
/// [`as_str`](Tag::as_str) returns the form sent to the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    /// Validate and clean `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`BrawlError::InvalidTag`] with the original input if the tag
    /// is malformed.
    pub fn parse(tag: &str) -> Result<Self> {
        if !validate(tag) {
            return Err(BrawlError::InvalidTag(tag.to_string()));
        }
        Ok(Self(clean(tag)))
    }

    /// The cleaned tag without the `#` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Tag {
    type Err = BrawlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
