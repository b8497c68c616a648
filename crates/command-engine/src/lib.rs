//! Command dispatch core for chat bots.
//!
//! Counts observed chat messages, fires interval messages when the count is
//! a multiple of their interval, and answers prefixed commands from a
//! registry of response templates.

mod counter;
mod dispatcher;
mod error;
mod interval;
mod matcher;
mod permission;
mod placeholder;
mod registry;
mod sink;
mod types;

pub use counter::{MessageCounter, COUNTER_WRAP};
pub use dispatcher::{
    DispatchOutcome, DispatchReport, DispatchSettings, Dispatcher, INVALID_USAGE_NOTICE,
};
pub use error::{CommandError, RegistryError};
pub use interval::fire_due_messages;
pub use matcher::{extract_command_token, extract_parameters, resolve_command};
pub use permission::is_authorized;
pub use placeholder::{substitute_parameters, substitute_reserved_keywords, USERNAME_PLACEHOLDER};
pub use registry::CommandRegistry;
pub use sink::ChatSink;
pub use types::*;
