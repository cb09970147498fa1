//! Internal domain models for music lookups.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types via adapters.

use std::fmt;

/// Placeholder used when a provider omits the track title
pub const UNKNOWN_TRACK: &str = "Unknown Track";
/// Placeholder used when a provider omits the artist name
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
/// Placeholder used when a provider omits the album title
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Track metadata produced by the track search adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    /// Track title
    pub title: String,
    /// Primary credited artist
    pub artist: String,
    /// Album title, with the release date appended in parentheses when known
    pub album: String,
    /// Track duration in whole seconds (0 when unknown)
    pub duration_secs: u64,
    /// Canonical permalink to the recording
    pub url: String,
    /// Up to three tag names, in provider order
    pub tags: Vec<String>,
}

/// Outcome of a lyrics lookup that reached the provider.
///
/// "Not found" and transport failures are represented by the absence of a
/// result (`Option::None`), not by a variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricsResult {
    /// Plain lyrics text
    Lyrics(String),
    /// The provider answered with an error message instead of lyrics
    Error(String),
}

impl LyricsResult {
    /// Text to hand to the rendering layer
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LyricsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LyricsResult::Lyrics(text) => f.write_str(text),
            LyricsResult::Error(message) => write!(f, "Error: {}", message),
        }
    }
}

/// One row of the trending chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingEntry {
    pub title: String,
    pub artist_name: String,
}

/// A song name as returned by tag-based lookups.
///
/// Either `"title - artist"` or a bare `title`; the upstream API doesn't expose
/// structured fields uniformly, so this stays a plain string.
pub type SongName = String;

/// Which provider a lookup was routed to (used for log context)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderSource {
    MusicBrainz,
    LyricsOvh,
    Deezer,
    LastFm,
}

impl ProviderSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderSource::MusicBrainz => "musicbrainz",
            ProviderSource::LyricsOvh => "lyrics.ovh",
            ProviderSource::Deezer => "deezer",
            ProviderSource::LastFm => "last.fm",
        }
    }
}

impl fmt::Display for ProviderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while talking to a provider.
///
/// These never leave the providers module: the session and adapters log them
/// and hand the caller an empty outcome instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Timed out while accessing: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API request failed: {url} - Status: {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Missing API key for {0}")]
    MissingApiKey(ProviderSource),
}
