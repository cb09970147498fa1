//! Music API facade - one entry point over all provider adapters
//!
//! This is the surface the command dispatcher talks to:
//! 1. Track search (MusicBrainz)
//! 2. Lyrics (lyrics.ovh)
//! 3. Trending chart (Deezer)
//! 4. Genre recommendations and mood songs (Last.fm)
//!
//! Every operation has a "nothing found" outcome (`None` or an empty list)
//! and none of them return errors.

use std::sync::Arc;

use crate::providers::{
    deezer::{self, DeezerClient},
    domain::{LyricsResult, SongName, TrackRecord, TrendingEntry},
    lastfm::{self, LastFmClient},
    lyrics_ovh::{self, LyricsOvhClient},
    musicbrainz::{self, MusicBrainzClient},
    session::{HttpSession, SessionConfig},
    traits::JsonTransport,
};

/// Provider endpoints and credentials
#[derive(Debug, Clone)]
pub struct MusicApiConfig {
    /// MusicBrainz web service root
    pub musicbrainz_url: String,
    /// lyrics.ovh API root
    pub lyrics_url: String,
    /// Deezer chart endpoint
    pub deezer_charts_url: String,
    /// Last.fm API root
    pub lastfm_url: String,
    /// Last.fm API key (get one at https://www.last.fm/api/account/create)
    pub lastfm_api_key: Option<String>,
}

impl Default for MusicApiConfig {
    fn default() -> Self {
        Self {
            musicbrainz_url: musicbrainz::DEFAULT_BASE_URL.to_string(),
            lyrics_url: lyrics_ovh::DEFAULT_BASE_URL.to_string(),
            deezer_charts_url: deezer::DEFAULT_CHARTS_URL.to_string(),
            lastfm_url: lastfm::DEFAULT_BASE_URL.to_string(),
            lastfm_api_key: None,
        }
    }
}

/// Aggregates the provider adapters over one shared transport
pub struct MusicApi {
    transport: Arc<dyn JsonTransport>,
    musicbrainz: MusicBrainzClient,
    lyrics: LyricsOvhClient,
    deezer: DeezerClient,
    lastfm: LastFmClient,
}

impl MusicApi {
    /// Build the adapters over an existing transport
    pub fn new(config: MusicApiConfig, transport: Arc<dyn JsonTransport>) -> Self {
        Self {
            musicbrainz: MusicBrainzClient::new(transport.clone(), config.musicbrainz_url),
            lyrics: LyricsOvhClient::new(transport.clone(), config.lyrics_url),
            deezer: DeezerClient::new(transport.clone(), config.deezer_charts_url),
            lastfm: LastFmClient::new(transport.clone(), config.lastfm_url, config.lastfm_api_key),
            transport,
        }
    }

    /// Build the adapters over a fresh (not yet opened) HTTP session
    pub fn with_session(config: MusicApiConfig, session: SessionConfig) -> Self {
        Self::new(config, Arc::new(HttpSession::new(session)))
    }

    /// Best MusicBrainz match for an artist and title
    pub async fn search_track(&self, artist: &str, title: &str) -> Option<TrackRecord> {
        self.musicbrainz.search_track(artist, title).await
    }

    /// Best MusicBrainz match for a free-text seed
    pub async fn search_track_text(&self, seed: &str) -> Option<TrackRecord> {
        self.musicbrainz.search_track_text(seed).await
    }

    pub async fn get_lyrics(&self, artist: &str, title: &str) -> Option<LyricsResult> {
        self.lyrics.get_lyrics(artist, title).await
    }

    pub async fn get_trending(&self) -> Vec<TrendingEntry> {
        self.deezer.get_trending().await
    }

    /// Expects the genre already lower-cased
    pub async fn get_recommendations(&self, genre: &str) -> Vec<SongName> {
        self.lastfm.get_recommendations(genre).await
    }

    /// Expects the mood already lower-cased
    pub async fn get_mood_songs(&self, mood: &str) -> Vec<SongName> {
        self.lastfm.get_mood_songs(mood).await
    }

    pub fn has_lastfm_key(&self) -> bool {
        self.lastfm.has_api_key()
    }

    /// Release pooled connections. Safe to call repeatedly; later calls reopen.
    pub fn close(&self) {
        self.transport.close();
    }
}
