//! Music providers - fetches track, lyrics and chart data from external services.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal records handed to the chat layer
//! - **API DTOs** (`*/dto.rs`) - Exact API response shapes
//! - **Adapters / Clients** - One per provider, convert DTOs to domain models
//! - **Transport** (`traits.rs`, `session.rs`) - The single shared HTTP session
//! - **Service** (`service.rs`) - The [`MusicApi`] facade over all adapters
//!
//! No operation here returns an error. Failures are logged and surface as
//! `None` or an empty list, so every result is renderable.
//!
//! # Usage
//!
//! ```ignore
//! use tunebot::providers::{MusicApi, MusicApiConfig, SessionConfig};
//!
//! let api = MusicApi::with_session(MusicApiConfig::default(), SessionConfig::default());
//! if let Some(track) = api.search_track("Adele", "Hello").await {
//!     println!("{} - {} ({})", track.artist, track.title, track.album);
//! }
//! api.close();
//! ```

pub mod deezer;
pub mod domain;
pub mod lastfm;
pub mod lyrics_ovh;
pub mod musicbrainz;
pub mod service;
pub mod session;
pub mod traits;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use domain::{LyricsResult, ProviderError, ProviderSource, SongName, TrackRecord, TrendingEntry};
pub use service::{MusicApi, MusicApiConfig};
pub use session::{HttpSession, SessionConfig};
pub use traits::JsonTransport;

/// Decode a fetched body into a provider DTO, logging shape mismatches.
pub(crate) fn decode_body<T: DeserializeOwned>(source: ProviderSource, body: Value) -> Option<T> {
    match serde_json::from_value(body) {
        Ok(dto) => Some(dto),
        Err(e) => {
            tracing::error!(provider = %source, "{}", ProviderError::Parse(e.to_string()));
            None
        }
    }
}
