//! Fire-and-forget outbound message queue.

use crate::client::TwitchClient;
use crate::error::TwitchError;
use crate::types::OutgoingMessage;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Producer side of the outbound queue.
///
/// Enqueuing never blocks, so synchronous code can hand messages to the
/// sender task.
#[derive(Clone)]
pub struct OutboundQueue {
    tx: UnboundedSender<OutgoingMessage>,
}

impl OutboundQueue {
    /// Create a queue and the receiver the sender task drains.
    pub fn new() -> (Self, UnboundedReceiver<OutgoingMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue a message for delivery.
    pub fn enqueue(&self, channel: &str, text: &str) -> Result<(), TwitchError> {
        self.tx
            .send(OutgoingMessage {
                channel: channel.to_string(),
                text: text.to_string(),
            })
            .map_err(|_| TwitchError::QueueClosed)
    }
}

/// Spawn the task that delivers queued messages.
///
/// Failed sends are logged and dropped.
pub fn spawn_sender(
    client: TwitchClient,
    mut rx: UnboundedReceiver<OutgoingMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            if let Err(e) = client.say(&message.channel, &message.text).await {
                error!("Failed to send message to {}: {}", message.channel, e);
            }
        }

        info!("Outbound queue closed, sender stopped");
    })
}
