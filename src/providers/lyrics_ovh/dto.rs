//! lyrics.ovh API Data Transfer Objects
//!
//! API Reference: https://lyricsovh.docs.apiary.io
//!
//! The service answers either `{"lyrics": "..."}` or `{"error": "..."}`.

use serde::{Deserialize, Serialize};

/// Response of `GET /v1/{artist}/{title}`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LyricsResponse {
    pub lyrics: Option<String>,
    pub error: Option<String>,
}
