//! Command word and parameter extraction.
//!
//! Everything after the prefix is lower-cased and split on single spaces, so
//! `!SO  Goat` yields the tokens `so`, `` and `goat`. Parameter values are
//! lower-cased along with the command word.

use crate::error::CommandError;
use crate::registry::CommandRegistry;
use crate::types::InvokableCommand;

/// Lower-cased text following `prefix`.
fn message_body(raw: &str, prefix: &str) -> Result<String, CommandError> {
    raw.strip_prefix(prefix)
        .map(str::to_lowercase)
        .ok_or(CommandError::NotPrefixed)
}

/// Return the command word of a prefixed message.
pub fn extract_command_token(raw: &str, prefix: &str) -> Result<String, CommandError> {
    let body = message_body(raw, prefix)?;
    if body.trim().is_empty() {
        return Err(CommandError::NoCommand);
    }

    match body.split(' ').next() {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(CommandError::NoCommand),
    }
}

/// First command in registry order whose invocation equals `token`.
pub fn resolve_command<'a>(
    token: &str,
    registry: &'a CommandRegistry,
) -> Option<&'a InvokableCommand> {
    registry.find(token)
}

/// Positional parameter values for `command`.
///
/// Trailing tokens beyond the declared parameters are ignored.
pub fn extract_parameters(
    raw: &str,
    prefix: &str,
    command: &InvokableCommand,
) -> Result<Vec<String>, CommandError> {
    let body = message_body(raw, prefix)?;
    let expected = command.parameters.len();

    let values: Vec<String> = body.split(' ').skip(1).map(String::from).collect();
    if values.len() < expected {
        return Err(CommandError::ParameterCountMismatch {
            expected,
            given: values.len(),
        });
    }

    Ok(values.into_iter().take(expected).collect())
}
