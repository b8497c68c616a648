//! Interval message triggering.

use crate::registry::CommandRegistry;
use crate::sink::ChatSink;
use tracing::debug;

/// Send every interval message due at `count`, in registry order.
///
/// Returns how many were sent. A count of zero is due for every interval.
pub fn fire_due_messages(
    count: u32,
    registry: &CommandRegistry,
    sink: &dyn ChatSink,
    channel: &str,
) -> usize {
    let mut fired = 0;
    for interval in registry.intervals().iter().filter(|i| i.is_due(count)) {
        debug!(count, every = interval.interval, "Sending interval message");
        sink.send(channel, &interval.message);
        fired += 1;
    }
    fired
}
