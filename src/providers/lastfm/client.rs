//! Last.fm client
//!
//! Recommendation and mood lookups both read `tag.gettoptracks`; they only
//! differ in how each track is turned into a song name.

use std::sync::Arc;

use super::dto;
use crate::providers::decode_body;
use crate::providers::domain::{
    ProviderError, ProviderSource, SongName, UNKNOWN_ARTIST, UNKNOWN_TRACK,
};
use crate::providers::traits::JsonTransport;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "http://ws.audioscrobbler.com/2.0/";

/// Tracks requested per tag lookup
pub const TAG_LIMIT: &str = "5";

/// Last.fm API client
pub struct LastFmClient {
    transport: Arc<dyn JsonTransport>,
    base_url: String,
    api_key: Option<String>,
}

impl LastFmClient {
    pub fn new(
        transport: Arc<dyn JsonTransport>,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Bare track names for a genre tag
    pub async fn get_recommendations(&self, genre: &str) -> Vec<SongName> {
        self.top_tracks(genre)
            .await
            .into_iter()
            .map(|t| track_name(&t))
            .collect()
    }

    /// `"name - artist"` strings for a mood tag
    pub async fn get_mood_songs(&self, mood: &str) -> Vec<SongName> {
        self.top_tracks(mood)
            .await
            .into_iter()
            .map(|t| format!("{} - {}", track_name(&t), artist_name(&t)))
            .collect()
    }

    async fn top_tracks(&self, tag: &str) -> Vec<dto::TopTrack> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("{}", ProviderError::MissingApiKey(ProviderSource::LastFm));
            return Vec::new();
        };

        let params = [
            ("method", "tag.gettoptracks"),
            ("tag", tag),
            ("api_key", api_key),
            ("format", "json"),
            ("limit", TAG_LIMIT),
        ];

        let Some(body) = self.transport.fetch_json(&self.base_url, &params).await else {
            return Vec::new();
        };
        let Some(response) = decode_body::<dto::TopTracksResponse>(ProviderSource::LastFm, body)
        else {
            return Vec::new();
        };

        if let Some(code) = response.error {
            tracing::error!(
                "Last.fm error {}: {}",
                code,
                response.message.as_deref().unwrap_or("unknown")
            );
        }

        response.tracks.track
    }
}

fn track_name(track: &dto::TopTrack) -> String {
    track.name.clone().unwrap_or_else(|| UNKNOWN_TRACK.to_string())
}

fn artist_name(track: &dto::TopTrack) -> String {
    track
        .artist
        .as_ref()
        .and_then(|a| a.name.clone())
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string())
}
