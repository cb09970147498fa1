//! tunebot - a chat bot for looking up music.
//!
//! Finds track details on MusicBrainz, lyrics on lyrics.ovh, the current
//! chart on Deezer and tag-based picks on Last.fm, and renders them as chat
//! replies. Runs as an interactive console or executes a single command line.

pub mod bot;
pub mod cli;
pub mod config;
pub mod error;
pub mod providers;
pub mod query;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    // Pick up LASTFM_API_KEY and friends before clap reads the environment
    dotenvy::dotenv().ok();

    let args = cli::Cli::parse();

    // Initialize logging (stderr, so replies on stdout stay clean)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("tunebot=info".parse()?))
        .init();

    cli::run_command(&args)
}
