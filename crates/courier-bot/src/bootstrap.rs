//! Runtime assembly from configuration.
//!
//! The platform backend owns the event loop; it calls here once at startup
//! to get a ready dispatcher, then feeds it invocations.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use courier_gateway::{AlertSink, NullAlertSink, WebhookAlertSink};
use courier_store::{AccountStore, SqliteAccountStore};
use courier_types::{BotConfig, CourierError};

use crate::commands::dispatcher::Dispatcher;
use crate::commands::registry::CommandRegistry;
use crate::commands::register_builtins;
use crate::cooldown::CooldownGate;

/// Build a ready dispatcher from configuration: the SQLite account store,
/// webhook alerting when a URL is configured, and every built-in command
/// registered.
pub fn build_dispatcher(config: &BotConfig) -> Result<Dispatcher, CourierError> {
    let store: Arc<dyn AccountStore> =
        Arc::new(SqliteAccountStore::open(Path::new(&config.database_path))?);

    let alerts: Arc<dyn AlertSink> = match &config.alert_webhook_url {
        Some(url) => match WebhookAlertSink::new(url) {
            Some(sink) => Arc::new(sink),
            None => {
                warn!("alert webhook unusable, operator reports disabled");
                Arc::new(NullAlertSink)
            }
        },
        None => Arc::new(NullAlertSink),
    };

    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    info!(commands = registry.names().len(), "command registry populated");

    Ok(Dispatcher::new(
        registry,
        CooldownGate::new(Duration::from_secs(config.cooldown_secs)),
        store,
        alerts,
    ))
}
