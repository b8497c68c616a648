//! Twitch chat types.

use chrono::{DateTime, Utc};
use twitch_irc::message::PrivmsgMessage;

/// Chat line received in a joined channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Channel login the message was posted in.
    pub channel: String,
    /// Login name of the sender (lower-case).
    pub sender: String,
    /// Display name of the sender.
    pub display_name: String,
    /// The message text.
    pub text: String,
    /// Badge names the sender holds, e.g. `moderator`.
    pub badges: Vec<String>,
    /// Time the server received the message.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Extract a chat message from a parsed PRIVMSG.
    pub fn from_privmsg(msg: &PrivmsgMessage) -> Self {
        Self {
            channel: msg.channel_login.clone(),
            sender: msg.sender.login.clone(),
            display_name: msg.sender.name.clone(),
            text: msg.message_text.clone(),
            badges: msg.badges.iter().map(|b| b.name.clone()).collect(),
            timestamp: msg.server_timestamp,
        }
    }
}

/// Message waiting in the outbound queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub channel: String,
    pub text: String,
}
