//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `chat`: interactive console session and one-shot command lines
//! - `setup`: writing a starter config file

mod chat;
mod setup;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config;

pub use chat::{cmd_chat, cmd_run};
pub use setup::cmd_init_config;

/// tunebot CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the one in the OS config directory
    #[arg(short, long, global = true, env = "TUNEBOT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Read chat lines from stdin and print the bot's replies (default)
    Chat,
    /// Run a single chat line, e.g. `tunebot run /lyrics Hello - Adele`
    Run {
        /// The chat line, prefix included
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },
    /// Write a config file with default settings
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the specified CLI command.
///
/// With no subcommand the interactive console starts.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    if let Some(Commands::InitConfig { force }) = &cli.command {
        return cmd_init_config(cli.config.as_deref(), *force);
    }

    let config = config::load(cli.config.as_deref());
    config.validate()?;

    let rt = Runtime::new()?;

    match &cli.command {
        Some(Commands::Run { line }) => cmd_run(&rt, &config, &line.join(" ")),
        Some(Commands::Chat) | None => cmd_chat(&rt, &config),
        Some(Commands::InitConfig { .. }) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_chat() {
        let cli = Cli::try_parse_from(["tunebot"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_run_collects_whole_line() {
        let cli =
            Cli::try_parse_from(["tunebot", "run", "/lyrics", "Hello", "-", "Adele"]).unwrap();
        match cli.command {
            Some(Commands::Run { line }) => assert_eq!(line.join(" "), "/lyrics Hello - Adele"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_run_requires_a_line() {
        assert!(Cli::try_parse_from(["tunebot", "run"]).is_err());
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli = Cli::try_parse_from(["tunebot", "init-config", "--config", "/tmp/t.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/t.toml")));
        assert_eq!(cli.command, Some(Commands::InitConfig { force: false }));
    }
}
