//! Twitch client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TwitchError {
    #[error("Invalid channel name '{channel}': {reason}")]
    InvalidChannel { channel: String, reason: String },

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Outbound queue closed")]
    QueueClosed,
}
