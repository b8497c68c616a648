//! Per-message dispatch: counting, interval messages and command replies.

use crate::counter::MessageCounter;
use crate::interval::fire_due_messages;
use crate::matcher::{extract_command_token, extract_parameters, resolve_command};
use crate::permission::is_authorized;
use crate::placeholder::{substitute_parameters, substitute_reserved_keywords};
use crate::registry::CommandRegistry;
use crate::sink::ChatSink;
use crate::types::InboundMessage;
use tracing::{debug, info, instrument, warn};

/// Notice sent when a command is invoked with too few parameters.
pub const INVALID_USAGE_NOTICE: &str = "Invalid usage of command";

/// Static settings for a dispatcher.
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    /// Text that marks a message as a command, e.g. `!`.
    pub prefix: String,
    /// The bot's own login; its messages are not counted.
    pub bot_name: String,
    /// Channel all replies and interval messages go to.
    pub channel: String,
}

/// What happened to the command part of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No prefix, not a command.
    Ignored,
    /// Prefix with no command word.
    NoCommand,
    /// Command word with no matching registry entry.
    UnknownCommand(String),
    /// Mod-only command from a sender without permission.
    Unauthorized(String),
    /// A reply was sent.
    Replied(String),
    /// Too few parameters; the usage notice was sent.
    InvalidUsage(String),
}

/// Result of dispatching one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// Counter value this message was evaluated at.
    pub count: u32,
    /// Interval messages sent this cycle.
    pub intervals_fired: usize,
    pub outcome: DispatchOutcome,
}

/// Routes inbound chat messages to interval messages and command replies.
///
/// Owns the registry and the message counter. The registry cannot change
/// once the dispatcher exists; the counter is atomic, so a dispatcher can be
/// shared across tasks behind an `Arc`.
pub struct Dispatcher<S: ChatSink> {
    settings: DispatchSettings,
    registry: CommandRegistry,
    counter: MessageCounter,
    sink: S,
}

impl<S: ChatSink> Dispatcher<S> {
    pub fn new(settings: DispatchSettings, registry: CommandRegistry, sink: S) -> Self {
        let counter = MessageCounter::new(settings.bot_name.clone());
        Self::with_counter(settings, registry, counter, sink)
    }

    /// Create a dispatcher around an existing counter.
    pub fn with_counter(
        settings: DispatchSettings,
        registry: CommandRegistry,
        counter: MessageCounter,
        sink: S,
    ) -> Self {
        info!(
            "Dispatcher ready for {} (prefix={:?}, commands={}, intervals={})",
            settings.channel,
            settings.prefix,
            registry.command_count(),
            registry.interval_count()
        );

        Self {
            settings,
            registry,
            counter,
            sink,
        }
    }

    pub fn counter(&self) -> &MessageCounter {
        &self.counter
    }

    /// Handle one inbound message.
    #[instrument(skip(self, message), fields(sender = %message.sender))]
    pub fn dispatch(&self, message: &InboundMessage) -> DispatchReport {
        let count = self.counter.record(&message.sender);
        let intervals_fired =
            fire_due_messages(count, &self.registry, &self.sink, &self.settings.channel);

        let outcome = self.handle_command(message);
        debug!(count, intervals_fired, ?outcome, "Dispatched message");

        DispatchReport {
            count,
            intervals_fired,
            outcome,
        }
    }

    fn handle_command(&self, message: &InboundMessage) -> DispatchOutcome {
        let prefix = self.settings.prefix.as_str();
        if !message.text.starts_with(prefix) {
            return DispatchOutcome::Ignored;
        }

        let token = match extract_command_token(&message.text, prefix) {
            Ok(token) => token,
            Err(e) => {
                warn!("Error parsing command from message: {}", e);
                return DispatchOutcome::NoCommand;
            }
        };

        let Some(command) = resolve_command(&token, &self.registry) else {
            return DispatchOutcome::UnknownCommand(token);
        };

        if !is_authorized(command, &message.badges) {
            debug!("{} is not allowed to use {}", message.sender, token);
            return DispatchOutcome::Unauthorized(token);
        }

        let reply = substitute_reserved_keywords(&command.message, &message.sender);
        if command.parameters.is_empty() {
            self.reply(&reply);
            return DispatchOutcome::Replied(reply);
        }

        match extract_parameters(&message.text, prefix, command) {
            Ok(values) => {
                let reply = substitute_parameters(&reply, &command.parameters, &values);
                self.reply(&reply);
                DispatchOutcome::Replied(reply)
            }
            Err(e) => {
                warn!("Invalid usage of '{}' by {}: {}", token, message.sender, e);
                self.reply(INVALID_USAGE_NOTICE);
                DispatchOutcome::InvalidUsage(token)
            }
        }
    }

    fn reply(&self, text: &str) {
        self.sink.send(&self.settings.channel, text);
    }
}
