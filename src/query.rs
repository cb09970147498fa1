//! Free-text song queries.
//!
//! Splits command arguments such as `"Hello by Adele"` into an artist and a
//! title. Pure string handling, no I/O.
//!
//! Two conventions coexist on purpose:
//! - [`parse_query`] (used by `/lyrics`) tries `" by "`, `" - "`, `" | "` in
//!   that order and strips featured artists and parenthetical suffixes.
//! - [`parse_track_query`] (used by `/track`) only knows `" - "` and `" by "`
//!   and leaves both halves as typed.
//!
//! In both, the text before the separator is the title.

/// Separators tried by [`parse_query`], highest priority first
pub const SEPARATORS: [&str; 3] = [" by ", " - ", " | "];

/// Featured-artist markers; the artist is cut at each in turn
const FEATURING_MARKERS: [&str; 2] = [" ft.", " feat."];

/// Title suffix marker, e.g. `"Hello (Live)"`
const TITLE_SUFFIX_MARKER: &str = " (";

/// An artist and title extracted from a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub artist: String,
    pub title: String,
}

/// Why a query couldn't be split
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("no artist/title separator in {0:?}")]
    NoSeparator(String),

    #[error("empty artist or title in {0:?}")]
    Empty(String),
}

/// Split a lyrics query into artist and title.
///
/// The first separator (by priority, not position) that occurs in the text
/// wins, and the text is split once at its first occurrence.
pub fn parse_query(text: &str) -> Result<ParsedQuery, QueryError> {
    let (title, artist) = SEPARATORS
        .iter()
        .find_map(|sep| text.split_once(sep))
        .ok_or_else(|| QueryError::NoSeparator(text.to_string()))?;

    let artist = clean_artist(artist);
    let title = clean_title(title);

    if artist.is_empty() || title.is_empty() {
        return Err(QueryError::Empty(text.to_string()));
    }

    Ok(ParsedQuery { artist, title })
}

/// Split a `/track` query: `"title - artist"`, or `"title by artist"` when
/// there is no dash.
pub fn parse_track_query(text: &str) -> Result<ParsedQuery, QueryError> {
    let separator = if text.contains(" - ") { " - " } else { " by " };
    let (title, artist) = text
        .split_once(separator)
        .ok_or_else(|| QueryError::NoSeparator(text.to_string()))?;

    let (artist, title) = (artist.trim(), title.trim());
    if artist.is_empty() || title.is_empty() {
        return Err(QueryError::Empty(text.to_string()));
    }

    Ok(ParsedQuery {
        artist: artist.to_string(),
        title: title.to_string(),
    })
}

/// Drop featured artists: `"Taylor Swift feat. X"` becomes `"Taylor Swift"`
pub fn clean_artist(artist: &str) -> String {
    FEATURING_MARKERS
        .iter()
        .fold(artist.trim(), |acc, marker| cut_at(acc, marker))
        .trim()
        .to_string()
}

/// Drop parenthetical suffixes: `"Hello (Live)"` becomes `"Hello"`
pub fn clean_title(title: &str) -> String {
    cut_at(title.trim(), TITLE_SUFFIX_MARKER).trim().to_string()
}

fn cut_at<'a>(text: &'a str, marker: &str) -> &'a str {
    text.split_once(marker).map_or(text, |(head, _)| head)
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// A word that can't contain any separator or marker
    fn word() -> impl Strategy<Value = String> {
        prop::string::string_regex("[A-Za-z0-9']{1,12}")
            .unwrap()
            .prop_filter("not a separator word", |w| w != "by" && w != "ft" && w != "feat")
    }

    /// Space-joined words
    fn phrase() -> impl Strategy<Value = String> {
        prop::collection::vec(word(), 1..4).prop_map(|words| words.join(" "))
    }

    proptest! {
        /// Well-formed "title - artist" strings split cleanly
        #[test]
        fn dash_query_roundtrips(title in phrase(), artist in phrase()) {
            let query = format!("{} - {}", title, artist);
            let parsed = parse_query(&query).unwrap();
            prop_assert_eq!(parsed.title, title);
            prop_assert_eq!(parsed.artist, artist);
        }

        /// Padding around either side never leaks into the result
        #[test]
        fn padding_is_trimmed(title in phrase(), artist in phrase(), pad in "[ ]{0,3}") {
            let query = format!("{}{} by {}{}", pad, title, artist, pad);
            let parsed = parse_query(&query).unwrap();
            prop_assert_eq!(parsed.title, title);
            prop_assert_eq!(parsed.artist, artist);
        }

        /// Text without any separator is always rejected
        #[test]
        fn separator_free_text_fails(text in phrase()) {
            prop_assert!(parse_query(&text).is_err());
        }

        /// Parsed fields are never empty and never padded
        #[test]
        fn parsed_fields_are_trimmed(text in "[A-Za-z ()|.-]{0,40}") {
            if let Ok(parsed) = parse_query(&text) {
                prop_assert!(!parsed.artist.is_empty());
                prop_assert!(!parsed.title.is_empty());
                prop_assert_eq!(parsed.artist.trim(), parsed.artist.as_str());
                prop_assert_eq!(parsed.title.trim(), parsed.title.as_str());
            }
        }
    }
}
