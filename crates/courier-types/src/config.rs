//! Runtime configuration for the bot.
//!
//! Built-in defaults overridden by `COURIER_*` environment variables. The
//! caller wires the result into the store, gateway, and dispatcher at
//! startup; nothing here reads config files.

use serde::{Deserialize, Serialize};

use crate::CourierError;

/// Default command cooldown window, in seconds.
pub const DEFAULT_COOLDOWN_SECS: u64 = 3;

/// Bot configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Path to the SQLite account database.
    pub database_path: String,
    /// Webhook URL for operator error reports. `None` disables alerting.
    pub alert_webhook_url: Option<String>,
    /// Per-user command cooldown window, in seconds.
    pub cooldown_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            database_path: "courier.db".to_string(),
            alert_webhook_url: None,
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
        }
    }
}

impl BotConfig {
    /// Load configuration from defaults plus `COURIER_*` environment
    /// variables.
    ///
    /// Recognized variables: `COURIER_DATABASE_PATH`,
    /// `COURIER_ALERT_WEBHOOK_URL`, `COURIER_COOLDOWN_SECS`.
    pub fn from_env() -> Result<Self, CourierError> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("COURIER_DATABASE_PATH") {
            config.database_path = path;
        }
        if let Ok(url) = std::env::var("COURIER_ALERT_WEBHOOK_URL") {
            if !url.is_empty() {
                config.alert_webhook_url = Some(url);
            }
        }
        if let Ok(secs) = std::env::var("COURIER_COOLDOWN_SECS") {
            config.cooldown_secs = secs.parse().map_err(|_| {
                CourierError::ConfigError(format!(
                    "COURIER_COOLDOWN_SECS must be an integer, got {secs:?}"
                ))
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = BotConfig::default();
        assert_eq!(config.cooldown_secs, DEFAULT_COOLDOWN_SECS);
        assert!(config.alert_webhook_url.is_none());
        assert!(!config.database_path.is_empty());
    }
}
