//! Command engine errors.

use thiserror::Error;

/// Errors raised while parsing a prefixed chat message.
///
/// None of these are fatal: the dispatcher logs them and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The message does not start with the configured prefix.
    #[error("Message does not start with the command prefix")]
    NotPrefixed,

    /// The prefix is present but no command word follows it.
    #[error("Missing command")]
    NoCommand,

    /// Fewer parameter tokens were given than the command declares.
    #[error("Number of parameters given ({given}) does not match the number of parameters in the command ({expected})")]
    ParameterCountMismatch { expected: usize, given: usize },
}

/// Errors raised while populating a [`crate::CommandRegistry`].
///
/// A rejected definition is left out of the registry; the rest of the batch
/// still loads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A parameter name shadows a reserved keyword such as `username`.
    #[error("Command '{invocation}' declares parameter '{parameter}' which is a reserved keyword")]
    ReservedKeywordConflict {
        invocation: String,
        parameter: String,
    },

    /// An interval message with `message_interval` of zero.
    #[error("Interval message '{message}' has a message_interval of 0")]
    ZeroInterval { message: String },
}
