//! MusicBrainz search client
//!
//! Handles recording searches against the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API/Search
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header; the shared session
//! sets one for every request.

use std::sync::Arc;

use super::{adapter, dto};
use crate::providers::decode_body;
use crate::providers::domain::{ProviderSource, TrackRecord};
use crate::providers::traits::JsonTransport;

/// Default web service root
pub const DEFAULT_BASE_URL: &str = "https://musicbrainz.org/ws/2";

/// MusicBrainz API client
pub struct MusicBrainzClient {
    transport: Arc<dyn JsonTransport>,
    base_url: String,
}

impl MusicBrainzClient {
    pub fn new(transport: Arc<dyn JsonTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Find the best matching recording for an artist and title.
    ///
    /// Blank inputs short-circuit to `None` without a request.
    pub async fn search_track(&self, artist: &str, title: &str) -> Option<TrackRecord> {
        let (artist, title) = (artist.trim(), title.trim());
        if artist.is_empty() || title.is_empty() {
            return None;
        }
        self.search(&structured_query(artist, title)).await
    }

    /// Find the best matching recording for a free-text seed
    pub async fn search_track_text(&self, seed: &str) -> Option<TrackRecord> {
        let seed = seed.trim();
        if seed.is_empty() {
            return None;
        }
        self.search(&format!("recording:\"{}\"", escape(seed))).await
    }

    async fn search(&self, query: &str) -> Option<TrackRecord> {
        let url = format!("{}/recording/", self.base_url);
        tracing::debug!(%query, "MusicBrainz recording search");

        let body = self
            .transport
            .fetch_json(&url, &[("query", query), ("fmt", "json"), ("limit", "1")])
            .await?;

        let response: dto::SearchResponse = decode_body(ProviderSource::MusicBrainz, body)?;
        adapter::first_track(response)
    }
}

/// Lucene query matching both the artist and the recording title
fn structured_query(artist: &str, title: &str) -> String {
    format!(
        "artist:\"{}\" AND recording:\"{}\"",
        escape(artist),
        escape(title)
    )
}

/// Escape characters that would end a quoted Lucene phrase
fn escape(term: &str) -> String {
    term.replace('\\', "\\\\").replace('"', "\\\"")
}
