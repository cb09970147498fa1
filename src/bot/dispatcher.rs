//! Command dispatcher - routes parsed commands to the music API and renders
//! the outcome.
//!
//! `handle` can be called concurrently from many tasks; the only shared
//! state is the API's transport and the playlist store.

use std::sync::Arc;

use chrono::Utc;

use super::command::{Command, help_text, parse_command};
use super::playlist::PlaylistStore;
use super::render::{self, Color, Reply};
use crate::providers::MusicApi;
use crate::query::{self, ParsedQuery};

/// Moods suggested when a mood lookup comes back empty
const COMMON_MOODS: [&str; 5] = ["happy", "sad", "chill", "energetic", "romantic"];

const PLAYLIST_USAGE: &str = "Usage: `/playlist [add/remove/view/clear] [song]`\n\
Examples:\n\
`/playlist add AntiHero`\n\
`/playlist view`\n\
`/playlist remove AntiHero`\n\
`/playlist clear`";

/// The chat user a command came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatUser {
    pub id: String,
    pub name: String,
}

impl ChatUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

pub struct Dispatcher {
    api: Arc<MusicApi>,
    playlists: PlaylistStore,
    prefix: String,
}

impl Dispatcher {
    pub fn new(api: Arc<MusicApi>, prefix: impl Into<String>) -> Self {
        Self {
            api,
            playlists: PlaylistStore::new(),
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Handle one chat line and return the replies to send, in order.
    ///
    /// Lines that aren't commands produce no replies.
    pub async fn handle(&self, user: &ChatUser, line: &str) -> Vec<Reply> {
        match parse_command(&self.prefix, line) {
            Ok(command) => {
                tracing::debug!(user = %user.id, ?command, "Dispatching command");
                self.run(user, command).await
            }
            Err(e) => {
                if let Some(message) = e.user_message() {
                    tracing::info!(user = %user.id, "Rejected command: {}", e);
                    vec![Reply::text(message)]
                } else {
                    Vec::new()
                }
            }
        }
    }

    async fn run(&self, user: &ChatUser, command: Command) -> Vec<Reply> {
        match command {
            Command::Lyrics(query) => self.lyrics(&query).await,
            Command::Track(query) => self.track(&query).await,
            Command::Trending => self.trending().await,
            Command::Recommend(genre) => self.recommend(&genre).await,
            Command::Mood(mood) => self.mood(&mood).await,
            Command::Playlist { action, song } => {
                self.playlist(user, action.as_deref(), song.as_deref())
            }
            Command::Help => vec![Reply::Text(help_text(&self.prefix))],
        }
    }

    /// Release network resources. Later commands reopen them.
    pub fn shutdown(&self) {
        self.api.close();
    }

    async fn lyrics(&self, query: &str) -> Vec<Reply> {
        let mut replies = vec![Reply::text(format!("Searching lyrics for: **{}**...", query))];

        let parsed = match query::parse_query(query) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::debug!("{}; falling back to track search", e);
                self.api
                    .search_track_text(query)
                    .await
                    .map(|track| ParsedQuery {
                        artist: query::clean_artist(&track.artist),
                        title: query::clean_title(&track.title),
                    })
            }
        };

        let Some(ParsedQuery { artist, title }) = parsed else {
            replies.push(Reply::text(
                "❌ Please specify both song and artist (e.g., `/lyrics Hello - Adele`)",
            ));
            return replies;
        };

        tracing::info!("Processed request - Artist: {}, Title: {}", artist, title);

        match self.api.get_lyrics(&artist, &title).await {
            Some(lyrics) => replies.extend(render::lyrics_replies(&lyrics.text())),
            None => replies.push(Reply::text(format!(
                "❌ Couldn't find lyrics for {} by {}",
                title, artist
            ))),
        }
        replies
    }

    async fn track(&self, query: &str) -> Vec<Reply> {
        let Ok(ParsedQuery { artist, title }) = query::parse_track_query(query) else {
            return vec![Reply::text(
                "❌ Please specify both song and artist (e.g. `/track Hello - Adele`)",
            )];
        };

        let mut replies = vec![Reply::text(format!("Searching for {} by {}...", title, artist))];
        match self.api.search_track(&artist, &title).await {
            Some(track) => replies.push(render::track_card(&track).into()),
            None => replies.push(Reply::text("❌ Couldn't find track information")),
        }
        replies
    }

    async fn trending(&self) -> Vec<Reply> {
        let mut replies = vec![Reply::text("Fetching trending tracks...")];
        let trending = self.api.get_trending().await;

        if trending.is_empty() {
            replies.push(Reply::text("❌ Couldn't fetch trending tracks at the moment."));
        } else {
            replies.push(render::trending_card(&trending, Utc::now()).into());
        }
        replies
    }

    async fn recommend(&self, genre: &str) -> Vec<Reply> {
        let mut replies = vec![Reply::text(format!("Getting {} recommendations...", genre))];
        let songs = self.api.get_recommendations(&genre.to_lowercase()).await;

        if songs.is_empty() {
            replies.push(Reply::text(format!(
                "❌ No recommendations found for {}. Try pop, rock, hiphop, etc.",
                genre
            )));
        } else {
            let title = format!("🎵 {} Recommendations", render::title_case(genre));
            replies.push(render::numbered_card(title, Color::Green, &songs).into());
        }
        replies
    }

    async fn mood(&self, mood: &str) -> Vec<Reply> {
        let mut replies = vec![Reply::text(format!("Finding {} songs...", mood))];
        let songs = self.api.get_mood_songs(&mood.to_lowercase()).await;

        if songs.is_empty() {
            replies.push(Reply::text(format!(
                "❌ No songs found for {}. Try: {}",
                mood,
                COMMON_MOODS.join(", ")
            )));
        } else {
            let title = format!("🎧 {} Mood Songs", render::title_case(mood));
            replies.push(render::numbered_card(title, Color::Purple, &songs).into());
        }
        replies
    }

    fn playlist(&self, user: &ChatUser, action: Option<&str>, song: Option<&str>) -> Vec<Reply> {
        let reply = match (action, song) {
            (Some("add"), Some(song)) => {
                self.playlists.add(&user.id, song);
                Reply::text(format!("✅ Added '{}' to your playlist!", song))
            }
            (Some("remove"), Some(song)) => {
                if self.playlists.remove(&user.id, song) {
                    Reply::text(format!("✅ Removed '{}' from your playlist!", song))
                } else {
                    Reply::text(format!("❌ '{}' not found in your playlist!", song))
                }
            }
            (Some("clear"), _) => {
                self.playlists.clear(&user.id);
                Reply::text("Your playlist has been cleared!")
            }
            (Some("view") | None, _) => {
                let songs = self.playlists.songs(&user.id);
                if songs.is_empty() {
                    Reply::text("Your playlist is empty! Use `/playlist add <song>` to add songs.")
                } else {
                    let title = format!("🎶 {}'s Playlist", user.name);
                    render::numbered_card(title, Color::Blurple, &songs).into()
                }
            }
            _ => Reply::text(PLAYLIST_USAGE),
        };
        vec![reply]
    }
}
