//! Lookup query
//!
//! A query is the trimmed input text, accepted only once it reaches the
//! configured minimum length.

use std::fmt;

/// Default minimum number of characters before a lookup is issued
pub const DEFAULT_MIN_CHARS: usize = 2;

/// A trimmed search query that satisfies the minimum length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Trim `raw` and accept it when it has at least `min_chars` characters
    ///
    /// Length is counted in characters, not bytes, so "ié" is two characters.
    pub fn parse(raw: &str, min_chars: usize) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().count() < min_chars {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
