//! Twitch chat bot answering data-driven commands.

pub mod bridge;
pub mod config;
pub mod error;
pub mod loader;

pub use bridge::{inbound_message, TwitchSink};
pub use config::Config;
pub use error::{AppError, AppResult, LoadError};
pub use loader::{load_commands, LoadReport};
