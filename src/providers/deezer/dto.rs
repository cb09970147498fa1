//! Deezer API Data Transfer Objects
//!
//! Only the slice of `GET /editorial/0/charts` we read.
//! API Reference: https://developers.deezer.com/api/chart

use serde::{Deserialize, Serialize};

/// Chart response (tracks, albums, artists, playlists... we only keep tracks)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChartResponse {
    #[serde(default)]
    pub tracks: TrackPage,
}

/// Paged list wrapper
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrackPage {
    #[serde(default)]
    pub data: Vec<ChartTrack>,
    pub total: Option<u64>,
}

/// Chart entry
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChartTrack {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub position: Option<u32>,
    pub artist: Option<ChartArtist>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChartArtist {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_chart() {
        let json = r#"{
            "tracks": {
                "data": [{
                    "id": 3135556,
                    "title": "Harder, Better, Faster, Stronger",
                    "position": 1,
                    "artist": {"id": 27, "name": "Daft Punk", "type": "artist"},
                    "type": "track"
                }],
                "total": 10
            },
            "albums": {"data": [], "total": 0}
        }"#;

        let chart: ChartResponse = serde_json::from_str(json).expect("Should parse chart");
        assert_eq!(chart.tracks.total, Some(10));

        let track = &chart.tracks.data[0];
        assert_eq!(track.position, Some(1));
        assert_eq!(
            track.artist.as_ref().and_then(|a| a.name.as_deref()),
            Some("Daft Punk")
        );
    }

    #[test]
    fn test_parse_without_tracks() {
        let chart: ChartResponse = serde_json::from_str(r#"{"albums": {}}"#).unwrap();
        assert!(chart.tracks.data.is_empty());
    }
}
