//! Match emphasis for rendered suggestions
//!
//! Splits a suggestion into plain and emphasized segments wherever the query
//! occurs, ignoring case. Views decide how emphasis looks.

/// A slice of suggestion text, emphasized when it matches the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            emphasized: false,
        }
    }

    fn emphasized(text: &'a str) -> Self {
        Self {
            text,
            emphasized: true,
        }
    }
}

fn chars_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Split `text` on every case-insensitive, non-overlapping occurrence of `query`
///
/// Comparison is per character, so segment boundaries always fall on
/// character boundaries of `text` even when lowercasing changes byte lengths.
pub fn split_matches<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }

    let text_chars: Vec<(usize, char)> = text.char_indices().collect();
    let query_chars: Vec<char> = query.chars().collect();
    let query_len = query_chars.len();

    if query_len == 0 || query_len > text_chars.len() {
        return vec![Segment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i + query_len <= text_chars.len() {
        let is_match = query_chars
            .iter()
            .enumerate()
            .all(|(j, q)| chars_match(text_chars[i + j].1, *q));

        if !is_match {
            i += 1;
            continue;
        }

        let start = text_chars[i].0;
        let end = text_chars
            .get(i + query_len)
            .map_or(text.len(), |(byte, _)| *byte);

        if start > plain_start {
            segments.push(Segment::plain(&text[plain_start..start]));
        }
        segments.push(Segment::emphasized(&text[start..end]));

        plain_start = end;
        i += query_len;
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }

    segments
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
