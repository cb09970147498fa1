//! Test utilities and fixtures for tunebot tests.
//!
//! Provider endpoints pointing at fake hosts, plus canned response bodies in
//! the shape each provider really returns. Pair them with
//! [`MockTransport`](crate::providers::traits::mocks::MockTransport).
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{MUSICBRAINZ_SEARCH_URL, recording_search_body, test_api_config};
//!
//! let mock = MockTransport::failing()
//!     .with_response(MUSICBRAINZ_SEARCH_URL, recording_search_body("Hello", "Adele", 295000));
//! let api = MusicApi::new(test_api_config(), Arc::new(mock));
//! ```

use serde_json::{Value, json};

use crate::providers::MusicApiConfig;

pub const MUSICBRAINZ_URL: &str = "http://mb.test/ws/2";
pub const MUSICBRAINZ_SEARCH_URL: &str = "http://mb.test/ws/2/recording/";
pub const LYRICS_URL: &str = "http://lyrics.test/v1";
pub const DEEZER_CHARTS_URL: &str = "http://deezer.test/editorial/0/charts";
pub const LASTFM_URL: &str = "http://lastfm.test/2.0/";

/// API config pointing every provider at a fake host, with a Last.fm key set
pub fn test_api_config() -> MusicApiConfig {
    MusicApiConfig {
        musicbrainz_url: MUSICBRAINZ_URL.to_string(),
        lyrics_url: LYRICS_URL.to_string(),
        deezer_charts_url: DEEZER_CHARTS_URL.to_string(),
        lastfm_url: LASTFM_URL.to_string(),
        lastfm_api_key: Some("test-key".to_string()),
    }
}

/// MusicBrainz search result with a single recording
pub fn recording_search_body(title: &str, artist: &str, length_ms: u64) -> Value {
    json!({
        "count": 1,
        "offset": 0,
        "recordings": [{
            "id": "rec-fixture",
            "score": 100,
            "title": title,
            "length": length_ms,
            "artist-credit": [{"name": artist}],
            "releases": [{"title": "Fixture Album", "date": "2020-01-01"}],
            "tags": [{"name": "pop", "count": 2}]
        }]
    })
}

/// Deezer chart with `len` numbered tracks
pub fn chart_body(len: usize) -> Value {
    let data: Vec<Value> = (1..=len)
        .map(|i| {
            json!({
                "title": format!("Song {}", i),
                "position": i,
                "artist": {"name": format!("Artist {}", i)}
            })
        })
        .collect();
    json!({"tracks": {"data": data, "total": len}})
}

/// Last.fm top tracks; the last entry has no artist
pub fn top_tracks_body() -> Value {
    json!({
        "tracks": {
            "track": [
                {"name": "Midnight City", "artist": {"name": "M83"}},
                {"name": "Intro", "artist": {"name": "The xx"}},
                {"name": "Untitled"}
            ],
            "@attr": {"tag": "chill"}
        }
    })
}
