//! Chat command parsing.
//!
//! A command line is `<prefix><name> <argument text>`. The argument text is
//! kept whole (it's a free-text song query for most commands).

/// Commands understood by the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/lyrics <query>`
    Lyrics(String),
    /// `/track <title - artist>`
    Track(String),
    /// `/trending`
    Trending,
    /// `/recommend <genre>`
    Recommend(String),
    /// `/mood <mood>`
    Mood(String),
    /// `/playlist [add|remove|view|clear] [song]`
    Playlist {
        action: Option<String>,
        song: Option<String>,
    },
    /// `/help`
    Help,
}

/// Why a line didn't produce a command
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The line doesn't start with the prefix; not addressed to the bot
    #[error("not a command")]
    NotACommand,

    #[error("unknown command: {0}")]
    NotFound(String),

    #[error("missing required argument for /{0}")]
    MissingArgument(&'static str),
}

impl CommandError {
    /// What to tell the user, if anything
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            CommandError::NotACommand => None,
            CommandError::NotFound(_) => {
                Some("❌ Command not found! Use `/help` to see available commands.")
            }
            CommandError::MissingArgument(_) => {
                Some("❌ Missing required argument! Check `/help` for command usage.")
            }
        }
    }
}

/// Parse one chat line
pub fn parse_command(prefix: &str, line: &str) -> Result<Command, CommandError> {
    let body = line
        .trim()
        .strip_prefix(prefix)
        .ok_or(CommandError::NotACommand)?;

    let (name, rest) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (body, ""),
    };
    if name.is_empty() {
        return Err(CommandError::NotACommand);
    }

    let required = |command: &'static str| -> Result<String, CommandError> {
        if rest.is_empty() {
            Err(CommandError::MissingArgument(command))
        } else {
            Ok(rest.to_string())
        }
    };

    match name {
        "lyrics" => required("lyrics").map(Command::Lyrics),
        "track" => required("track").map(Command::Track),
        "trending" => Ok(Command::Trending),
        "recommend" => required("recommend").map(Command::Recommend),
        "mood" => required("mood").map(Command::Mood),
        "playlist" => Ok(parse_playlist(rest)),
        "help" => Ok(Command::Help),
        other => Err(CommandError::NotFound(other.to_string())),
    }
}

fn parse_playlist(rest: &str) -> Command {
    let (action, song) = match rest.split_once(char::is_whitespace) {
        Some((action, song)) => (action, song.trim()),
        None => (rest, ""),
    };

    Command::Playlist {
        action: Some(action).filter(|a| !a.is_empty()).map(String::from),
        song: Some(song).filter(|s| !s.is_empty()).map(String::from),
    }
}

/// Text shown by `/help`
pub fn help_text(prefix: &str) -> String {
    [
        ("lyrics <song> - <artist>", "Get the lyrics for a song"),
        ("track <song> - <artist>", "Show track details"),
        ("trending", "Show the currently trending tracks"),
        ("recommend <genre>", "Recommend tracks for a genre"),
        ("mood <mood>", "Find songs matching a mood"),
        ("playlist [add/remove/view/clear] [song]", "Manage your playlist"),
        ("help", "Show this message"),
    ]
    .iter()
    .map(|(usage, about)| format!("`{}{}` - {}", prefix, usage, about))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_kept_whole() {
        assert_eq!(
            parse_command("/", "/lyrics Hello - Adele"),
            Ok(Command::Lyrics("Hello - Adele".to_string()))
        );
    }

    #[test]
    fn test_no_argument_commands() {
        assert_eq!(parse_command("/", "/trending"), Ok(Command::Trending));
        assert_eq!(parse_command("/", "  /help  "), Ok(Command::Help));
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            parse_command("/", "/mood   "),
            Err(CommandError::MissingArgument("mood"))
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_command("/", "/dance now").unwrap_err();
        assert_eq!(err, CommandError::NotFound("dance".to_string()));
        assert!(err.user_message().unwrap().contains("Command not found"));
    }

    #[test]
    fn test_plain_chat_ignored() {
        let err = parse_command("/", "hello everyone").unwrap_err();
        assert_eq!(err, CommandError::NotACommand);
        assert!(err.user_message().is_none());
    }

    #[test]
    fn test_bare_prefix_ignored() {
        assert_eq!(parse_command("/", "/"), Err(CommandError::NotACommand));
        assert_eq!(parse_command("/", "  /  "), Err(CommandError::NotACommand));
        assert_eq!(
            parse_command("/", "/ lyrics Hello - Adele"),
            Err(CommandError::NotACommand)
        );
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(parse_command("!", "!trending"), Ok(Command::Trending));
        assert_eq!(
            parse_command("!", "/trending"),
            Err(CommandError::NotACommand)
        );
    }

    #[test]
    fn test_playlist_forms() {
        assert_eq!(
            parse_command("/", "/playlist"),
            Ok(Command::Playlist {
                action: None,
                song: None
            })
        );
        assert_eq!(
            parse_command("/", "/playlist view"),
            Ok(Command::Playlist {
                action: Some("view".to_string()),
                song: None
            })
        );
        assert_eq!(
            parse_command("/", "/playlist add Anti-Hero by Taylor Swift"),
            Ok(Command::Playlist {
                action: Some("add".to_string()),
                song: Some("Anti-Hero by Taylor Swift".to_string())
            })
        );
    }

    #[test]
    fn test_help_text_uses_prefix() {
        let help = help_text("!");
        assert!(help.contains("`!lyrics"));
        assert!(help.contains("`!playlist"));
    }
}
