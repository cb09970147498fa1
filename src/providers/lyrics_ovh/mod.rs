//! lyrics.ovh integration
//!
//! Free lyrics lookup by artist and title, no key required.

pub mod dto;
mod client;

pub use client::{DEFAULT_BASE_URL, LyricsOvhClient};
