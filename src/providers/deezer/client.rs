//! Deezer chart client

use std::sync::Arc;

use super::dto;
use crate::providers::decode_body;
use crate::providers::domain::{ProviderSource, TrendingEntry, UNKNOWN_ARTIST, UNKNOWN_TRACK};
use crate::providers::traits::JsonTransport;

/// Default global chart endpoint
pub const DEFAULT_CHARTS_URL: &str = "https://api.deezer.com/editorial/0/charts";

/// Chart entries handed back per request
pub const MAX_TRENDING: usize = 10;

/// Deezer API client
pub struct DeezerClient {
    transport: Arc<dyn JsonTransport>,
    charts_url: String,
}

impl DeezerClient {
    pub fn new(transport: Arc<dyn JsonTransport>, charts_url: impl Into<String>) -> Self {
        Self {
            transport,
            charts_url: charts_url.into(),
        }
    }

    /// Current chart, at most [`MAX_TRENDING`] entries in chart order.
    ///
    /// Any failure yields an empty list.
    pub async fn get_trending(&self) -> Vec<TrendingEntry> {
        let Some(body) = self.transport.fetch_json(&self.charts_url, &[]).await else {
            return Vec::new();
        };
        let Some(chart) = decode_body::<dto::ChartResponse>(ProviderSource::Deezer, body) else {
            return Vec::new();
        };

        chart
            .tracks
            .data
            .into_iter()
            .take(MAX_TRENDING)
            .map(to_entry)
            .collect()
    }
}

fn to_entry(track: dto::ChartTrack) -> TrendingEntry {
    TrendingEntry {
        title: track.title.unwrap_or_else(|| UNKNOWN_TRACK.to_string()),
        artist_name: track
            .artist
            .and_then(|a| a.name)
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
    }
}
