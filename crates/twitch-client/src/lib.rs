//! Twitch chat client.

mod client;
mod error;
mod outbound;
mod receiver;
mod types;

pub use client::TwitchClient;
pub use error::TwitchError;
pub use outbound::{spawn_sender, OutboundQueue};
pub use receiver::MessageReceiver;
pub use types::*;
