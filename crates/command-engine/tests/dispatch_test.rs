//! Integration tests for message dispatch.

mod common;

use command_engine::{
    Badge, CommandRegistry, DispatchOutcome, Dispatcher, InboundMessage, IntervalMessage,
    InvokableCommand, INVALID_USAGE_NOTICE,
};
use common::{test_settings, RecordingSink};
use std::sync::Arc;
use std::thread;

fn goat_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry
        .add_command(InvokableCommand::new("discord", "Join the herd: https://discord.gg/goat"))
        .unwrap();
    registry
        .add_command(
            InvokableCommand::new("hug", "$username hugs $target and $target hugs back")
                .with_parameters(["target"]),
        )
        .unwrap();
    registry
        .add_command(
            InvokableCommand::new("title", "Title set to $first $second by $username")
                .with_parameters(["first", "second"])
                .mod_only(),
        )
        .unwrap();
    registry
}

#[test]
fn test_interval_cadence() {
    let mut registry = goat_registry();
    registry
        .add_interval(IntervalMessage::new("Hydrate!", 3))
        .unwrap();

    let sink = Arc::new(RecordingSink::default());
    let dispatcher = Dispatcher::new(test_settings(), registry, sink.clone());

    for i in 1..=9 {
        dispatcher.dispatch(&InboundMessage::new("viewer", format!("message {}", i)));
    }

    // Counts 3, 6 and 9
    assert_eq!(sink.texts(), vec!["Hydrate!", "Hydrate!", "Hydrate!"]);
    assert!(sink.sent().iter().all(|(channel, _)| channel == "goatchannel"));
}

#[test]
fn test_bot_messages_do_not_advance_intervals() {
    let mut registry = CommandRegistry::new();
    registry.add_interval(IntervalMessage::new("tick", 2)).unwrap();

    let sink = Arc::new(RecordingSink::default());
    let dispatcher = Dispatcher::new(test_settings(), registry, sink.clone());

    dispatcher.dispatch(&InboundMessage::new("viewer", "one"));
    assert!(sink.texts().is_empty());

    // The bot's own line re-evaluates count 1 without advancing it
    dispatcher.dispatch(&InboundMessage::new("goatbot", "tick"));
    assert!(sink.texts().is_empty());

    dispatcher.dispatch(&InboundMessage::new("viewer", "two"));
    assert_eq!(sink.texts(), vec!["tick"]);

    // Still at count 2, so the bot's line fires it again
    dispatcher.dispatch(&InboundMessage::new("goatbot", "tick"));
    assert_eq!(sink.texts(), vec!["tick", "tick"]);
    assert_eq!(dispatcher.counter().current(), 2);
}

#[test]
fn test_conversation_flow() {
    let sink = Arc::new(RecordingSink::default());
    let dispatcher = Dispatcher::new(test_settings(), goat_registry(), sink.clone());

    let outcomes: Vec<DispatchOutcome> = [
        InboundMessage::new("alice", "hi chat"),
        InboundMessage::new("alice", "!Discord"),
        InboundMessage::new("bob", "!hug Alice"),
        InboundMessage::new("bob", "!hug"),
        InboundMessage::new("bob", "!title new stream"),
        InboundMessage::new("streamer", "!title new stream").with_badge(Badge::Broadcaster),
        InboundMessage::new("carol", "!lurk"),
    ]
    .iter()
    .map(|message| dispatcher.dispatch(message).outcome)
    .collect();

    assert_eq!(
        outcomes,
        vec![
            DispatchOutcome::Ignored,
            DispatchOutcome::Replied("Join the herd: https://discord.gg/goat".into()),
            DispatchOutcome::Replied("bob hugs alice and alice hugs back".into()),
            DispatchOutcome::InvalidUsage("hug".into()),
            DispatchOutcome::Unauthorized("title".into()),
            DispatchOutcome::Replied("Title set to new stream by streamer".into()),
            DispatchOutcome::UnknownCommand("lurk".into()),
        ]
    );

    assert_eq!(
        sink.texts(),
        vec![
            "Join the herd: https://discord.gg/goat",
            "bob hugs alice and alice hugs back",
            INVALID_USAGE_NOTICE,
            "Title set to new stream by streamer",
        ]
    );
}

#[test]
fn test_concurrent_dispatch_fires_each_multiple_once() {
    let mut registry = CommandRegistry::new();
    registry.add_interval(IntervalMessage::new("every ten", 10)).unwrap();

    let sink = Arc::new(RecordingSink::default());
    let dispatcher = Arc::new(Dispatcher::new(test_settings(), registry, sink.clone()));

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let dispatcher = dispatcher.clone();
            thread::spawn(move || {
                for i in 0..250 {
                    dispatcher.dispatch(&InboundMessage::new(format!("viewer{}", n), format!("msg {}", i)));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(dispatcher.counter().current(), 1000);
    assert_eq!(sink.texts().len(), 100);
}
