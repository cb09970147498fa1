//! Command-line interface for tunebot.
//!
//! This module provides the interactive console front end and one-shot
//! command execution on top of the chat dispatcher.

mod commands;

pub use commands::{Cli, Commands, run_command};
