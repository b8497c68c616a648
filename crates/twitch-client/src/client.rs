//! Twitch IRC client.

use crate::error::TwitchError;
use crate::receiver::MessageReceiver;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument, warn};
use twitch_irc::login::StaticLoginCredentials;
use twitch_irc::{ClientConfig, SecureTCPTransport, TwitchIRCClient};

type IrcClient = TwitchIRCClient<SecureTCPTransport, StaticLoginCredentials>;

/// Twitch chat client over TLS.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct TwitchClient {
    client: IrcClient,
    login: String,
}

impl TwitchClient {
    /// Create a new Twitch client and the receiver for its incoming messages.
    ///
    /// The token may carry the `oauth:` prefix used by IRC clients. The
    /// connection is opened lazily by the first join. Must be called from
    /// within a Tokio runtime.
    pub fn new(login: impl Into<String>, token: &SecretString) -> (Self, MessageReceiver) {
        let login = login.into();
        let credentials = StaticLoginCredentials::new(
            login.clone(),
            Some(normalize_token(token.expose_secret()).to_string()),
        );

        let (incoming, client) = IrcClient::new(ClientConfig::new_simple(credentials));
        debug!("Created Twitch client for {}", login);

        let receiver = MessageReceiver::new(incoming, login.clone());
        (Self { client, login }, receiver)
    }

    /// Get the bot's login name.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Join a channel, connecting first if needed.
    #[instrument(skip(self))]
    pub fn join(&self, channel: &str) -> Result<(), TwitchError> {
        let channel = normalize_channel(channel);
        self.client
            .join(channel.clone())
            .map_err(|e| TwitchError::InvalidChannel {
                channel: channel.clone(),
                reason: e.to_string(),
            })?;

        info!("Connecting to #{}...", channel);
        Ok(())
    }

    /// Send a message to a channel.
    #[instrument(skip(self, text))]
    pub async fn say(&self, channel: &str, text: &str) -> Result<(), TwitchError> {
        if let Err(e) = self
            .client
            .say(normalize_channel(channel), text.to_string())
            .await
        {
            warn!("Send failed: {}", e);
            return Err(TwitchError::SendFailed(e.to_string()));
        }

        debug!("Sent message to #{}", channel);
        Ok(())
    }
}

/// Strip the `oauth:` prefix IRC-style tokens carry.
pub(crate) fn normalize_token(token: &str) -> &str {
    token.strip_prefix("oauth:").unwrap_or(token)
}

/// Channel logins are lower-case and written without `#`.
pub(crate) fn normalize_channel(channel: &str) -> String {
    channel.trim_start_matches('#').to_lowercase()
}
