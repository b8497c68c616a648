//! Mod-only command gate.

use crate::types::{Badge, InvokableCommand};
use std::collections::HashSet;

/// Whether a sender holding `badges` may invoke `command`.
///
/// Mod-only commands need the moderator or broadcaster badge.
pub fn is_authorized(command: &InvokableCommand, badges: &HashSet<Badge>) -> bool {
    !command.mod_only || badges.contains(&Badge::Moderator) || badges.contains(&Badge::Broadcaster)
}
