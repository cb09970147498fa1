//! Deezer integration
//!
//! Supplies the trending chart. Public endpoint, no key required.

pub mod dto;
mod client;

pub use client::{DEFAULT_CHARTS_URL, DeezerClient, MAX_TRENDING};
