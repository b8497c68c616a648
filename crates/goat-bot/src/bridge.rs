//! Glue between the Twitch transport and the command engine.

use command_engine::{Badge, ChatSink, InboundMessage};
use tracing::error;
use twitch_client::{ChatMessage, OutboundQueue};

/// [`ChatSink`] that hands replies to the Twitch outbound queue.
#[derive(Clone)]
pub struct TwitchSink {
    queue: OutboundQueue,
}

impl TwitchSink {
    pub fn new(queue: OutboundQueue) -> Self {
        Self { queue }
    }
}

impl ChatSink for TwitchSink {
    fn send(&self, channel: &str, text: &str) {
        if let Err(e) = self.queue.enqueue(channel, text) {
            error!("Dropping message for {}: {}", channel, e);
        }
    }
}

/// Convert a received chat line into a dispatcher event.
pub fn inbound_message(message: &ChatMessage) -> InboundMessage {
    InboundMessage {
        text: message.text.clone(),
        sender: message.sender.clone(),
        badges: message
            .badges
            .iter()
            .map(|name| Badge::from(name.as_str()))
            .collect(),
    }
}
