//! Chat-facing layer: command parsing, dispatch, rendering and playlists.
//!
//! Nothing here is tied to a particular chat platform. A gateway feeds
//! `(user, line)` pairs into [`Dispatcher::handle`] and sends back the
//! [`Reply`] values it gets, in order.

pub mod command;
pub mod dispatcher;
pub mod playlist;
pub mod render;

pub use command::{Command, CommandError, parse_command};
pub use dispatcher::{ChatUser, Dispatcher};
pub use render::{Embed, Reply};
