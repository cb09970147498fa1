//! Config file setup command.

use std::path::Path;

use crate::config::{self, Config, ConfigError};
use crate::error::{Error, ResultExt};

/// Write a default config to `path`, or to the OS config directory
pub fn cmd_init_config(path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config::config_path().ok_or(ConfigError::NoConfigDir)?,
    };

    if path.exists() && !force {
        return Err(Error::already_exists(path.display().to_string())
            .context("use --force to overwrite")
            .into());
    }

    config::save(&Config::default(), &path).with_context("writing default config")?;
    println!("Wrote default config to {}", path.display());
    println!("Set LASTFM_API_KEY (or credentials.lastfm_api_key) to enable recommend and mood.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        cmd_init_config(Some(&path), false).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: Config = toml::from_str(&contents).unwrap();
        assert_eq!(parsed.bot.command_prefix, "/");
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[bot]\ncommand_prefix = \"!\"\n").unwrap();

        let err = cmd_init_config(Some(&path), false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert!(std::fs::read_to_string(&path).unwrap().contains('!'));

        cmd_init_config(Some(&path), true).unwrap();
        assert!(!std::fs::read_to_string(&path).unwrap().contains('!'));
    }
}
