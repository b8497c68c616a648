//! Outbound chat capability.

/// Delivers text to a chat channel.
///
/// Sending is fire-and-forget: implementations queue or deliver the message
/// and handle their own failures.
#[cfg_attr(test, mockall::automock)]
pub trait ChatSink: Send + Sync {
    fn send(&self, channel: &str, text: &str);
}

impl<T: ChatSink + ?Sized> ChatSink for std::sync::Arc<T> {
    fn send(&self, channel: &str, text: &str) {
        (**self).send(channel, text)
    }
}
