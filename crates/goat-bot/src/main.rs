//! goat-bot - Main entry point.

use anyhow::Context;
use command_engine::Dispatcher;
use goat_bot::{inbound_message, load_commands, AppResult, Config, TwitchSink};
use std::time::Duration;
use tokio::signal;
use tokio_stream::StreamExt;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use twitch_client::{spawn_sender, OutboundQueue, TwitchClient};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log_level);

    info!("Setting up bot...");

    let report = load_commands(&config.commands_dir)?;
    if !report.skipped.is_empty() {
        warn!("{} command files skipped", report.skipped.len());
    }

    // Outbound path: dispatcher -> queue -> sender task -> Twitch
    let (queue, outgoing) = OutboundQueue::new();
    let dispatcher = Dispatcher::new(
        config.dispatch_settings(),
        report.registry,
        TwitchSink::new(queue),
    );

    info!("Starting bot...");
    let (client, receiver) = TwitchClient::new(&config.name, &config.secret);
    let sender = spawn_sender(client.clone(), outgoing);

    client.join(&config.channel)?;
    info!("Joining #{} as {}", config.channel, client.login());

    let mut stream = Box::pin(receiver.stream());

    // Main message loop
    loop {
        tokio::select! {
            message = stream.next() => {
                let Some(message) = message else {
                    warn!("Chat stream ended");
                    break;
                };

                let report = dispatcher.dispatch(&inbound_message(&message));
                debug!("Message {} handled: {:?}", report.count, report.outcome);
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");

    // Dropping the dispatcher closes the queue; let queued replies drain
    drop(dispatcher);
    if tokio::time::timeout(SHUTDOWN_GRACE, sender).await.is_err() {
        warn!("Outbound queue did not drain before shutdown");
    }
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
