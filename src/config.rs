use crate::error::ConfigError;
use std::env;

/// Credentials read once at startup. All three are required; the process
/// must not reach the poll loop without them.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the Practicum homework API.
    pub practicum_token: String,
    /// Token of the Telegram bot used for delivery.
    pub telegram_token: String,
    /// Identifier of the chat notifications are sent to.
    pub telegram_chat_id: String,
}

impl Config {
    /// Reads the configuration from environment variables. An unset or
    /// empty variable is reported by name.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            practicum_token: require_var("PRACTICUM_TOKEN")?,
            telegram_token: require_var("TELEGRAM_TOKEN")?,
            telegram_chat_id: require_var("TELEGRAM_CHAT_ID")?,
        })
    }
}

fn require_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingVar(key))
}
