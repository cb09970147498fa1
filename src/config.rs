//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\tunebot\config.toml
//! - macOS: ~/Library/Application Support/tunebot/config.toml
//! - Linux: ~/.config/tunebot/config.toml
//!
//! A `--config` path on the command line replaces that location. Secrets can
//! stay out of the file: `LASTFM_API_KEY` from the environment (or a `.env`
//! file) overrides whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::providers::{MusicApiConfig, SessionConfig, deezer, lastfm, lyrics_ovh, musicbrainz};

/// Environment variable holding the Last.fm API key
pub const LASTFM_API_KEY_ENV: &str = "LASTFM_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials (keep separate for potential future encryption)
    pub credentials: Credentials,

    /// HTTP session settings
    pub http: HttpConfig,

    /// Provider endpoints
    pub endpoints: EndpointsConfig,

    /// Chat behaviour
    pub bot: BotConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Last.fm API key for recommendation and mood lookups
    pub lastfm_api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Total time budget per request, in seconds
    pub timeout_secs: u64,

    /// User-Agent sent with every request
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        let session = SessionConfig::default();
        Self {
            timeout_secs: session.timeout.as_secs(),
            user_agent: session.user_agent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub musicbrainz: String,
    pub lyrics: String,
    pub deezer_charts: String,
    pub lastfm: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            musicbrainz: musicbrainz::DEFAULT_BASE_URL.to_string(),
            lyrics: lyrics_ovh::DEFAULT_BASE_URL.to_string(),
            deezer_charts: deezer::DEFAULT_CHARTS_URL.to_string(),
            lastfm: lastfm::DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Prefix that marks a chat line as a command
    pub command_prefix: String,

    /// Display name used for the console user
    pub console_user: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            command_prefix: "/".to_string(),
            console_user: "console".to_string(),
        }
    }
}

impl Config {
    /// Settings for the shared HTTP session
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            timeout: Duration::from_secs(self.http.timeout_secs),
            user_agent: self.http.user_agent.clone(),
        }
    }

    /// Endpoints and credentials for the music API
    pub fn music_api_config(&self) -> MusicApiConfig {
        MusicApiConfig {
            musicbrainz_url: self.endpoints.musicbrainz.clone(),
            lyrics_url: self.endpoints.lyrics.clone(),
            deezer_charts_url: self.endpoints.deezer_charts.clone(),
            lastfm_url: self.endpoints.lastfm.clone(),
            lastfm_api_key: self.credentials.lastfm_api_key.clone(),
        }
    }

    /// Replace the file's Last.fm key with `key` when one is given
    pub fn apply_env_overrides(&mut self, lastfm_api_key: Option<String>) {
        if let Some(key) = lastfm_api_key.filter(|k| !k.trim().is_empty()) {
            self.credentials.lastfm_api_key = Some(key);
        }
    }

    /// Reject settings the bot can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.command_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "bot.command_prefix must not be empty".to_string(),
            ));
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "http.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tunebot"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from `path`, or from the default location.
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
/// Environment overrides are applied on top.
pub fn load(path: Option<&Path>) -> Config {
    let mut config = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(path) => load_file(&path),
        None => {
            tracing::warn!("Could not determine config directory, using defaults");
            Config::default()
        }
    };

    config.apply_env_overrides(std::env::var(LASTFM_API_KEY_ENV).ok());
    config
}

fn load_file(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to `path`
///
/// Creates the parent directory if it doesn't exist.
pub fn save(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    // Serialize to pretty TOML
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// ============================================================================
// Tests
// ============================================================================
