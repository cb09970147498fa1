//! Last.fm API Data Transfer Objects
//!
//! API Reference: https://www.last.fm/api/show/tag.getTopTracks

use serde::{Deserialize, Serialize};

/// Response of `method=tag.gettoptracks`.
///
/// Failures come back as `{"error": 10, "message": "Invalid API Key"}`,
/// sometimes with a 200 status, so both shapes live in one struct.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub tracks: TrackList,
    pub error: Option<u32>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrackList {
    #[serde(default)]
    pub track: Vec<TopTrack>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TopTrack {
    pub name: Option<String>,
    pub url: Option<String>,
    pub artist: Option<TrackArtist>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrackArtist {
    pub name: Option<String>,
    pub mbid: Option<String>,
}
