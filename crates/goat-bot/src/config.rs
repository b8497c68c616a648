//! Application configuration loaded from environment variables.

use anyhow::{bail, Context, Result};
use command_engine::DispatchSettings;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration.
///
/// Read from `PREFIX`, `CHANNEL`, `NAME`, `SECRET`, `COMMANDS_DIR` and
/// `LOG_LEVEL`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Text that marks a chat message as a command
    pub prefix: String,

    /// Channel to join and post in
    pub channel: String,

    /// Bot login name
    pub name: String,

    /// OAuth token for the bot account
    pub secret: SecretString,

    /// Directory holding `*.command.json` and `*.interval.json` files
    #[serde(default = "default_commands_dir")]
    pub commands_dir: PathBuf,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_commands_dir() -> PathBuf {
    PathBuf::from("commands")
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::default())
    }

    /// Build configuration from an environment source.
    pub fn from_environment(environment: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(environment.try_parsing(false))
            .build()
            .context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Reject blank values for required settings.
    pub fn validate(&self) -> Result<()> {
        for (var, value) in [
            ("PREFIX", self.prefix.as_str()),
            ("CHANNEL", self.channel.as_str()),
            ("NAME", self.name.as_str()),
            ("SECRET", self.secret.expose_secret().as_str()),
        ] {
            if value.trim().is_empty() {
                bail!("no {} defined", var);
            }
        }
        Ok(())
    }

    /// Settings for the command dispatcher.
    pub fn dispatch_settings(&self) -> DispatchSettings {
        DispatchSettings {
            prefix: self.prefix.clone(),
            bot_name: self.name.clone(),
            channel: self.channel.clone(),
        }
    }
}
