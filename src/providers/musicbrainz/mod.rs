//! MusicBrainz API integration
//!
//! Backs the track search adapter: a structured artist + recording query
//! whose best hit becomes a [`TrackRecord`](crate::providers::TrackRecord).
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod adapter;
mod client;

pub use client::{DEFAULT_BASE_URL, MusicBrainzClient};
