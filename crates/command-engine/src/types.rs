//! Command definitions and inbound chat events.

use serde::Deserialize;
use std::collections::HashSet;

/// Identifiers substituted from message context. Parameter names may not
/// shadow these.
pub const RESERVED_KEYWORDS: &[&str] = &["username"];

/// Named slot in a command's parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandParameter {
    pub name: String,
}

impl CommandParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Whether this name collides with a reserved keyword (case-insensitive).
    pub fn is_reserved(&self) -> bool {
        RESERVED_KEYWORDS
            .iter()
            .any(|keyword| self.name.eq_ignore_ascii_case(keyword))
    }

    /// The `$name` placeholder this parameter fills in.
    pub fn placeholder(&self) -> String {
        format!("${}", self.name)
    }
}

/// A command users trigger by typing `<prefix><invocation>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InvokableCommand {
    /// Token that triggers the command, compared against the lower-cased
    /// command word.
    pub invocation: String,

    /// Positional parameters, also the placeholder names.
    #[serde(default)]
    pub parameters: Vec<CommandParameter>,

    /// Response template.
    pub message: String,

    /// Restrict to moderators and the broadcaster.
    #[serde(default)]
    pub mod_only: bool,
}

impl InvokableCommand {
    pub fn new(invocation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            invocation: invocation.into(),
            parameters: Vec::new(),
            message: message.into(),
            mod_only: false,
        }
    }

    pub fn with_parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = names.into_iter().map(CommandParameter::new).collect();
        self
    }

    pub fn mod_only(mut self) -> Self {
        self.mod_only = true;
        self
    }
}

/// A message posted every `interval` observed chat messages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IntervalMessage {
    pub message: String,

    #[serde(rename = "message_interval")]
    pub interval: u32,
}

impl IntervalMessage {
    pub fn new(message: impl Into<String>, interval: u32) -> Self {
        Self {
            message: message.into(),
            interval,
        }
    }

    /// Whether this message is due at `count`.
    pub fn is_due(&self, count: u32) -> bool {
        count.checked_rem(self.interval) == Some(0)
    }
}

/// Chat badge carried by the sender of a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Badge {
    Broadcaster,
    Moderator,
    Vip,
    Subscriber,
    Other(String),
}

impl From<&str> for Badge {
    fn from(name: &str) -> Self {
        match name {
            "broadcaster" => Badge::Broadcaster,
            "moderator" => Badge::Moderator,
            "vip" => Badge::Vip,
            "subscriber" => Badge::Subscriber,
            other => Badge::Other(other.to_string()),
        }
    }
}

/// Incoming chat line, already parsed by the transport.
#[derive(Debug, Clone, Default)]
pub struct InboundMessage {
    /// Message body.
    pub text: String,
    /// Login name of the sender.
    pub sender: String,
    /// Badges the sender holds in the channel.
    pub badges: HashSet<Badge>,
}

impl InboundMessage {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: sender.into(),
            badges: HashSet::new(),
        }
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badges.insert(badge);
        self
    }
}
