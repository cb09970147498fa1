//! Last.fm integration
//!
//! Tag-based top tracks, used for genre recommendations and mood playlists.
//! Requires an API key: https://www.last.fm/api/account/create

pub mod dto;
mod client;

pub use client::{DEFAULT_BASE_URL, LastFmClient, TAG_LIMIT};
