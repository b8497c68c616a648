//! Common test utilities for integration tests.

use command_engine::{ChatSink, DispatchSettings};
use std::sync::Mutex;

/// Sink that records every message it is asked to send.
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|(_, text)| text).collect()
    }
}

impl ChatSink for RecordingSink {
    fn send(&self, channel: &str, text: &str) {
        self.sent
            .lock()
            .unwrap()
            .push((channel.to_string(), text.to_string()));
    }
}

pub fn test_settings() -> DispatchSettings {
    DispatchSettings {
        prefix: "!".into(),
        bot_name: "goatbot".into(),
        channel: "goatchannel".into(),
    }
}
