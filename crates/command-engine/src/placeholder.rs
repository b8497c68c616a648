//! `$name` placeholder substitution.
//!
//! Replacement is literal and global. Parameters are applied in declared
//! order, so with parameters `a` then `ab` the text `$ab` is rewritten by
//! `$a` first. Templates relying on that overlap get whatever that order
//! produces.

use crate::types::CommandParameter;

/// Placeholder filled with the invoking user's name.
pub const USERNAME_PLACEHOLDER: &str = "$username";

/// Replace reserved keywords in `template` with values from the invoker.
pub fn substitute_reserved_keywords(template: &str, invoker: &str) -> String {
    template.replace(USERNAME_PLACEHOLDER, invoker)
}

/// Replace each `$<parameter>` with its positional value.
///
/// Surplus parameters or values beyond the shorter of the two lists are left
/// alone.
pub fn substitute_parameters(
    template: &str,
    parameters: &[CommandParameter],
    values: &[String],
) -> String {
    parameters
        .iter()
        .zip(values)
        .fold(template.to_string(), |text, (parameter, value)| {
            text.replace(&parameter.placeholder(), value)
        })
}
