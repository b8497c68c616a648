//! Incoming chat stream.

use crate::types::ChatMessage;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_stream::Stream;
use tracing::{debug, info, warn};
use twitch_irc::message::ServerMessage;

/// Turns raw server messages into a stream of chat lines.
pub struct MessageReceiver {
    incoming: UnboundedReceiver<ServerMessage>,
    login: String,
}

impl MessageReceiver {
    /// Create a receiver over the client's incoming message channel.
    pub fn new(incoming: UnboundedReceiver<ServerMessage>, login: impl Into<String>) -> Self {
        Self {
            incoming,
            login: login.into(),
        }
    }

    /// Start receiving chat messages as an async stream.
    ///
    /// Ends when the underlying client is dropped.
    pub fn stream(mut self) -> impl Stream<Item = ChatMessage> {
        async_stream::stream! {
            while let Some(message) = self.incoming.recv().await {
                match message {
                    ServerMessage::Privmsg(msg) => {
                        let chat = ChatMessage::from_privmsg(&msg);
                        debug!("Received: {} from {}",
                            chat.text.chars().take(50).collect::<String>(),
                            chat.sender
                        );
                        yield chat;
                    }
                    ServerMessage::Join(join) if join.user_login == self.login => {
                        info!("Connected to {}", join.channel_login);
                    }
                    ServerMessage::Notice(notice) => {
                        info!("Notice: {}", notice.message_text);
                    }
                    ServerMessage::Reconnect(_) => {
                        info!("Server requested a reconnect");
                    }
                    _ => {}
                }
            }

            warn!("Incoming message channel closed");
        }
    }
}
