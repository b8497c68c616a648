//! Registry of invokable commands and interval messages.

use crate::error::RegistryError;
use crate::types::{IntervalMessage, InvokableCommand};
use tracing::warn;

/// Ordered table of commands and interval messages.
///
/// Populated once before dispatch starts and read-only afterwards. Insertion
/// order is iteration order, and duplicate invocations are kept: lookups
/// return the first one.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<InvokableCommand>,
    intervals: Vec<IntervalMessage>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an invokable command.
    ///
    /// Rejects commands whose parameter names shadow a reserved keyword.
    pub fn add_command(&mut self, command: InvokableCommand) -> Result<(), RegistryError> {
        if let Some(parameter) = command.parameters.iter().find(|p| p.is_reserved()) {
            return Err(RegistryError::ReservedKeywordConflict {
                invocation: command.invocation.clone(),
                parameter: parameter.name.clone(),
            });
        }

        if self.find(&command.invocation).is_some() {
            warn!(
                "Duplicate invocation '{}' registered, the earlier command takes precedence",
                command.invocation
            );
        }

        self.commands.push(command);
        Ok(())
    }

    /// Register an interval message. Rejects an interval of zero.
    pub fn add_interval(&mut self, interval: IntervalMessage) -> Result<(), RegistryError> {
        if interval.interval == 0 {
            return Err(RegistryError::ZeroInterval {
                message: interval.message,
            });
        }

        self.intervals.push(interval);
        Ok(())
    }

    /// First command whose invocation equals `token` exactly.
    pub fn find(&self, token: &str) -> Option<&InvokableCommand> {
        self.commands.iter().find(|c| c.invocation == token)
    }

    pub fn commands(&self) -> &[InvokableCommand] {
        &self.commands
    }

    pub fn intervals(&self) -> &[IntervalMessage] {
        &self.intervals
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.intervals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_find() {
        let mut registry = CommandRegistry::new();
        registry
            .add_command(InvokableCommand::new("discord", "join us"))
            .unwrap();

        assert!(registry.find("discord").is_some());
        assert!(registry.find("Discord").is_none());
        assert!(registry.find("twitter").is_none());
        assert_eq!(registry.command_count(), 1);
    }

    #[test]
    fn test_reserved_parameter_rejected() {
        let mut registry = CommandRegistry::new();

        let err = registry
            .add_command(InvokableCommand::new("hug", "$USERNAME hugs").with_parameters(["USERNAME"]))
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::ReservedKeywordConflict {
                invocation: "hug".into(),
                parameter: "USERNAME".into(),
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_rejection_does_not_affect_other_commands() {
        let mut registry = CommandRegistry::new();

        registry
            .add_command(InvokableCommand::new("first", "one"))
            .unwrap();
        assert!(registry
            .add_command(InvokableCommand::new("bad", "x").with_parameters(["target", "username"]))
            .is_err());
        registry
            .add_command(InvokableCommand::new("second", "two"))
            .unwrap();

        let invocations: Vec<&str> = registry
            .commands()
            .iter()
            .map(|c| c.invocation.as_str())
            .collect();
        assert_eq!(invocations, vec!["first", "second"]);
    }

    #[test]
    fn test_duplicates_first_wins() {
        let mut registry = CommandRegistry::new();
        registry
            .add_command(InvokableCommand::new("dup", "first"))
            .unwrap();
        registry
            .add_command(InvokableCommand::new("dup", "second"))
            .unwrap();

        assert_eq!(registry.command_count(), 2);
        assert_eq!(registry.find("dup").unwrap().message, "first");
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut registry = CommandRegistry::new();

        let err = registry
            .add_interval(IntervalMessage::new("spam", 0))
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::ZeroInterval {
                message: "spam".into()
            }
        );
        assert_eq!(registry.interval_count(), 0);
    }

    #[test]
    fn test_intervals_keep_order() {
        let mut registry = CommandRegistry::new();
        registry.add_interval(IntervalMessage::new("a", 2)).unwrap();
        registry.add_interval(IntervalMessage::new("b", 5)).unwrap();

        let messages: Vec<&str> = registry
            .intervals()
            .iter()
            .map(|i| i.message.as_str())
            .collect();
        assert_eq!(messages, vec!["a", "b"]);
    }
}
