//! MusicBrainz API Data Transfer Objects
//!
//! These types match what the MusicBrainz recording search returns.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API/Search
//!
//! Every field is optional or defaulted: the search index regularly omits
//! releases, tags and even lengths, and a missing field must degrade to a
//! placeholder rather than fail the whole response.

use serde::{Deserialize, Serialize};

/// Response of `GET /ws/2/recording/?query=...&fmt=json`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Total number of hits (not just those returned)
    pub count: Option<u64>,
    /// Offset of the first returned hit
    pub offset: Option<u64>,
    /// Matching recordings, best first
    #[serde(default)]
    pub recordings: Vec<Recording>,
}

/// Recording search hit
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Recording {
    /// MusicBrainz recording ID
    pub id: Option<String>,
    /// Search relevance (0-100)
    pub score: Option<u32>,
    /// Track title
    pub title: Option<String>,
    /// Duration in milliseconds
    pub length: Option<u64>,
    /// Artist credits
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
    /// Releases this recording appears on
    #[serde(default)]
    pub releases: Vec<Release>,
    /// Folksonomy tags
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Artist credit (can be multiple for collaborations)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtistCredit {
    /// How this artist is credited (may differ from official name)
    pub name: Option<String>,
    /// Join phrase (e.g., " & ", " feat. ")
    pub joinphrase: Option<String>,
    /// The artist
    pub artist: Option<Artist>,
}

/// Artist info
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artist {
    pub id: Option<String>,
    pub name: Option<String>,
    pub sort_name: Option<String>,
}

/// Release (album/single/EP)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Release {
    pub id: Option<String>,
    pub title: Option<String>,
    /// Release status (Official, Bootleg, etc.)
    pub status: Option<String>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub date: Option<String>,
}

/// Tag with vote count
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub count: i64,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_empty_search() {
        let json = r#"{"created": "2024-01-01T00:00:00.000Z", "count": 0, "offset": 0, "recordings": []}"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse empty search");

        assert_eq!(response.count, Some(0));
        assert!(response.recordings.is_empty());
    }

    #[test]
    fn test_parse_missing_recordings_key() {
        let response: SearchResponse =
            serde_json::from_str("{}").expect("Should parse bare object");
        assert!(response.recordings.is_empty());
    }

    #[test]
    fn test_parse_full_search_hit() {
        let json = r#"{
            "count": 1,
            "offset": 0,
            "recordings": [{
                "id": "a1b2c3",
                "score": 100,
                "title": "Hello",
                "length": 295502,
                "artist-credit": [{
                    "name": "Adele",
                    "artist": {"id": "art-1", "name": "Adele", "sort-name": "Adele"}
                }],
                "releases": [{
                    "id": "rel-1",
                    "title": "25",
                    "status": "Official",
                    "date": "2015-11-20"
                }],
                "tags": [{"count": 3, "name": "pop"}, {"count": 1, "name": "soul"}]
            }]
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse search hit");

        let recording = &response.recordings[0];
        assert_eq!(recording.id.as_deref(), Some("a1b2c3"));
        assert_eq!(recording.length, Some(295502));
        assert_eq!(recording.artist_credit[0].name.as_deref(), Some("Adele"));
        assert_eq!(
            recording.artist_credit[0]
                .artist
                .as_ref()
                .and_then(|a| a.sort_name.as_deref()),
            Some("Adele")
        );
        assert_eq!(recording.releases[0].date.as_deref(), Some("2015-11-20"));
        assert_eq!(recording.tags.len(), 2);
        assert_eq!(recording.tags[0].count, 3);
    }

    #[test]
    fn test_parse_sparse_recording() {
        let json = r#"{"recordings": [{"id": "only-id"}]}"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse sparse recording");

        let recording = &response.recordings[0];
        assert!(recording.title.is_none());
        assert!(recording.length.is_none());
        assert!(recording.artist_credit.is_empty());
        assert!(recording.releases.is_empty());
    }
}
