//! Observed-message counter driving interval messages.

use std::sync::atomic::{AtomicU32, Ordering};

/// Largest value the counter holds before wrapping back to zero.
pub const COUNTER_WRAP: u32 = u32::MAX - 1;

/// Counts chat messages not sent by the bot itself.
///
/// The counter is the only clock for interval messages. Every update is a
/// single compare-and-swap, so concurrent dispatchers never lose increments
/// and each one sees the value its own increment produced.
#[derive(Debug)]
pub struct MessageCounter {
    bot_name: String,
    count: AtomicU32,
}

impl MessageCounter {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self::starting_at(bot_name, 0)
    }

    pub fn starting_at(bot_name: impl Into<String>, count: u32) -> Self {
        Self {
            bot_name: bot_name.into(),
            count: AtomicU32::new(count),
        }
    }

    /// Record a message from `sender` and return the count for this cycle.
    ///
    /// Messages from the bot leave the count untouched. At [`COUNTER_WRAP`]
    /// the count resets to zero before the increment is applied.
    pub fn record(&self, sender: &str) -> u32 {
        if sender == self.bot_name {
            return self.current();
        }

        let previous = self
            .count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                Some(next_count(count))
            })
            .unwrap_or_else(|count| count);

        next_count(previous)
    }

    pub fn current(&self) -> u32 {
        self.count.load(Ordering::Acquire)
    }
}

fn next_count(count: u32) -> u32 {
    let base = if count >= COUNTER_WRAP { 0 } else { count };
    base + 1
}
