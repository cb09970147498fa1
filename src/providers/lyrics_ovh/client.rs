//! lyrics.ovh client
//!
//! Artist and title travel as path segments, so they are percent-encoded
//! here. Callers are expected to have cleaned them already (featured
//! artists and parenthetical suffixes stripped).

use std::sync::Arc;

use super::dto;
use crate::providers::decode_body;
use crate::providers::domain::{LyricsResult, ProviderSource};
use crate::providers::traits::JsonTransport;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.lyrics.ovh/v1";

/// lyrics.ovh API client
pub struct LyricsOvhClient {
    transport: Arc<dyn JsonTransport>,
    base_url: String,
}

impl LyricsOvhClient {
    pub fn new(transport: Arc<dyn JsonTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch lyrics for a song.
    ///
    /// `None` means nothing usable came back: the request failed or the body
    /// carried neither lyrics nor an error message.
    pub async fn get_lyrics(&self, artist: &str, title: &str) -> Option<LyricsResult> {
        let url = self.lyrics_url(artist, title);
        tracing::info!("Fetching lyrics from: {}", url);

        let body = self.transport.fetch_json(&url, &[]).await?;
        let response: dto::LyricsResponse = decode_body(ProviderSource::LyricsOvh, body)?;
        to_result(response)
    }

    fn lyrics_url(&self, artist: &str, title: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(artist),
            urlencoding::encode(title)
        )
    }
}

fn to_result(response: dto::LyricsResponse) -> Option<LyricsResult> {
    match (response.lyrics, response.error) {
        (Some(lyrics), _) if !lyrics.trim().is_empty() => Some(LyricsResult::Lyrics(lyrics)),
        (_, Some(error)) => Some(LyricsResult::Error(error)),
        _ => None,
    }
}
