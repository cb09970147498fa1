//! Console chat commands.
//!
//! The console acts as a single chat user: every stdin line goes through the
//! same dispatcher a chat gateway would use.

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::bot::{ChatUser, Dispatcher, Reply};
use crate::config::Config;
use crate::error::ResultExt;
use crate::providers::MusicApi;

/// Read chat lines from stdin until EOF or Ctrl-C
pub fn cmd_chat(rt: &Runtime, config: &Config) -> anyhow::Result<()> {
    rt.block_on(chat_loop(config))
}

/// Run one chat line and print its replies
pub fn cmd_run(rt: &Runtime, config: &Config, line: &str) -> anyhow::Result<()> {
    rt.block_on(async {
        let dispatcher = build_dispatcher(config);
        let replies = dispatcher.handle(&console_user(config), line).await;
        if replies.is_empty() {
            eprintln!(
                "Not a command: lines start with `{}`. Try `{}help`.",
                dispatcher.prefix(),
                dispatcher.prefix()
            );
        }
        print_replies(&replies);
        dispatcher.shutdown();
    });
    Ok(())
}

async fn chat_loop(config: &Config) -> anyhow::Result<()> {
    let dispatcher = build_dispatcher(config);
    let user = console_user(config);

    println!(
        "tunebot ready. Type {}help for commands, Ctrl-D to quit.",
        dispatcher.prefix()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.with_context("reading chat line")? {
                    Some(line) => print_replies(&dispatcher.handle(&user, &line).await),
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, shutting down");
                break;
            }
        }
    }

    dispatcher.shutdown();
    Ok(())
}

fn build_dispatcher(config: &Config) -> Dispatcher {
    let api = MusicApi::with_session(config.music_api_config(), config.session_config());
    if !api.has_lastfm_key() {
        warn!("No Last.fm API key configured; recommend and mood will come back empty");
    }
    Dispatcher::new(Arc::new(api), config.bot.command_prefix.clone())
}

fn console_user(config: &Config) -> ChatUser {
    ChatUser::new(&config.bot.console_user, &config.bot.console_user)
}

fn print_replies(replies: &[Reply]) {
    for reply in replies {
        print!("{}", reply);
    }
}
