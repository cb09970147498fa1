//! Turns provider records into chat replies.
//!
//! Replies are platform-neutral: plain text or an embed-like card. A chat
//! gateway maps them onto its own message types; the console front end just
//! prints their `Display` form.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::providers::{SongName, TrackRecord, TrendingEntry};

/// Largest lyrics chunk sent in one message
pub const LYRICS_CHUNK_CHARS: usize = 1900;

/// Lyrics beyond this many characters are dropped with a notice
pub const LYRICS_MAX_CHARS: usize = 5700;

pub const LYRICS_TRUNCATED_NOTICE: &str = "Lyrics truncated due to length...";

/// Card accent colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Gold,
    Green,
    Purple,
    Blurple,
}

impl Color {
    /// RGB value as used by chat platforms
    pub fn rgb(self) -> u32 {
        match self {
            Color::Blue => 0x3498db,
            Color::Gold => 0xf1c40f,
            Color::Green => 0x2ecc71,
            Color::Purple => 0x9b59b6,
            Color::Blurple => 0x5865f2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A rich card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub color: Color,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Embed {
    pub fn new(title: impl Into<String>, color: Color) -> Self {
        Self {
            title: title.into(),
            description: None,
            url: None,
            color,
            fields: Vec::new(),
            footer: None,
            timestamp: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Look up a field value by name
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

impl fmt::Display for Embed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "{}", description)?;
        }
        if let Some(url) = &self.url {
            writeln!(f, "<{}>", url)?;
        }
        for field in &self.fields {
            writeln!(f, "{} {}", field.name, field.value)?;
        }
        if let Some(footer) = &self.footer {
            writeln!(f, "-- {}", footer)?;
        }
        if let Some(timestamp) = &self.timestamp {
            writeln!(f, "({})", timestamp.to_rfc3339())?;
        }
        Ok(())
    }
}

/// One outgoing chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Embed(Embed),
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Text(text) => Some(text),
            Reply::Embed(_) => None,
        }
    }

    pub fn as_embed(&self) -> Option<&Embed> {
        match self {
            Reply::Embed(embed) => Some(embed),
            Reply::Text(_) => None,
        }
    }
}

impl From<Embed> for Reply {
    fn from(embed: Embed) -> Self {
        Reply::Embed(embed)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Text(text) => writeln!(f, "{}", text),
            Reply::Embed(embed) => embed.fmt(f),
        }
    }
}

/// Split lyrics into code-block messages.
///
/// At most [`LYRICS_MAX_CHARS`] characters are sent, in chunks of
/// [`LYRICS_CHUNK_CHARS`]; longer lyrics get a trailing notice.
pub fn lyrics_replies(lyrics: &str) -> Vec<Reply> {
    let chars: Vec<char> = lyrics.chars().collect();
    let shown = &chars[..chars.len().min(LYRICS_MAX_CHARS)];

    let mut replies: Vec<Reply> = shown
        .chunks(LYRICS_CHUNK_CHARS)
        .map(|chunk| Reply::Text(format!("```\n{}\n```", chunk.iter().collect::<String>())))
        .collect();

    if chars.len() > LYRICS_MAX_CHARS {
        replies.push(Reply::text(LYRICS_TRUNCATED_NOTICE));
    }
    replies
}

/// `m:ss`
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Capitalize the first letter of every word, lower-case the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

pub fn track_card(track: &TrackRecord) -> Embed {
    let mut embed = Embed::new(format!("🎵 {}", track.title), Color::Blue)
        .description(format!("by {}", track.artist))
        .url(&track.url)
        .field("Album", &track.album, true);

    if track.duration_secs > 0 {
        embed = embed.field("Duration", format_duration(track.duration_secs), true);
    }
    if !track.tags.is_empty() {
        embed = embed.field("Tags", track.tags.join(", "), false);
    }
    embed
}

pub fn trending_card(entries: &[TrendingEntry], now: DateTime<Utc>) -> Embed {
    entries
        .iter()
        .enumerate()
        .fold(
            Embed::new("Currently Trending", Color::Gold).timestamp(now),
            |embed, (i, entry)| {
                embed.field(
                    format!("{}. {}", i + 1, entry.title),
                    format!("by {}", entry.artist_name),
                    false,
                )
            },
        )
        .footer("Use /lyrics to get lyrics for any of these songs")
}

/// Numbered list card used for recommendations, moods and playlists
pub fn numbered_card(title: impl Into<String>, color: Color, items: &[SongName]) -> Embed {
    items
        .iter()
        .enumerate()
        .fold(Embed::new(title, color), |embed, (i, item)| {
            embed.field(format!("{}.", i + 1), item, false)
        })
}
