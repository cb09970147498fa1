//! Adapter layer: Convert MusicBrainz DTOs to domain models
//!
//! This is the ONLY place where MusicBrainz DTO types are converted to domain
//! types. Missing fields become the placeholders from `domain`, never errors.

use super::dto;
use crate::providers::domain::{TrackRecord, UNKNOWN_ALBUM, UNKNOWN_ARTIST, UNKNOWN_TRACK};

/// Base of the public recording permalink
const RECORDING_URL: &str = "https://musicbrainz.org/recording/";

/// Maximum number of tags carried on a record
const MAX_TAGS: usize = 3;

/// Convert the first hit of a search response, if any
pub fn first_track(response: dto::SearchResponse) -> Option<TrackRecord> {
    response.recordings.into_iter().next().and_then(to_track_record)
}

/// Convert a single recording to a TrackRecord.
///
/// Returns `None` only when the recording has no id, since the permalink
/// can't be built without one.
pub fn to_track_record(recording: dto::Recording) -> Option<TrackRecord> {
    let id = recording.id.filter(|id| !id.is_empty())?;

    let album = album_string(recording.releases.first());
    let artist = first_artist(&recording.artist_credit);

    let tags = recording
        .tags
        .into_iter()
        .take(MAX_TAGS)
        .map(|t| t.name)
        .collect();

    Some(TrackRecord {
        title: recording.title.unwrap_or_else(|| UNKNOWN_TRACK.to_string()),
        artist,
        album,
        duration_secs: recording.length.unwrap_or(0) / 1000,
        url: format!("{}{}", RECORDING_URL, id),
        tags,
    })
}

/// Album title with the release date appended, e.g. `"25 (2015-11-20)"`
fn album_string(release: Option<&dto::Release>) -> String {
    let Some(release) = release else {
        return UNKNOWN_ALBUM.to_string();
    };

    let title = release.title.as_deref().unwrap_or(UNKNOWN_ALBUM);
    match release.date.as_deref() {
        Some(date) => format!("{} ({})", title, date),
        None => title.to_string(),
    }
}

/// Name of the first credited artist
fn first_artist(credits: &[dto::ArtistCredit]) -> String {
    credits
        .first()
        .and_then(|credit| {
            // Use credited name if available, otherwise official name
            credit
                .name
                .clone()
                .or_else(|| credit.artist.as_ref().and_then(|a| a.name.clone()))
        })
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string())
}
