//! Common test utilities for integration tests.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use twitch_client::ChatMessage;

/// Create a commands directory holding the given `(file name, json)` pairs.
pub fn commands_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        write_file(dir.path(), name, contents);
    }
    dir
}

fn write_file(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Chat line from `sender` in the test channel.
pub fn chat(sender: &str, text: &str, badges: &[&str]) -> ChatMessage {
    ChatMessage {
        channel: "goatchannel".into(),
        sender: sender.into(),
        display_name: sender.into(),
        text: text.into(),
        badges: badges.iter().map(|b| b.to_string()).collect(),
        timestamp: Default::default(),
    }
}
