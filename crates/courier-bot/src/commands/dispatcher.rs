//! The dispatcher: from inbound invocation to handler execution.
//!
//! Per invocation:
//!
//! 1. Ignore invocations without a guild context.
//! 2. Unknown command names are a silent no-op.
//! 3. Load the invoker's account by identity. A store failure is reported
//!    to the operator channel and aborts with no user-visible response.
//! 4. Claim the cooldown gate; refusal gets an ephemeral cooldown notice.
//! 5. Commands that require a linked account refuse unlinked invokers
//!    with a signup/login prompt (and give the claimed window back).
//! 6. Run the handler; handler errors go to the operator channel only.
//!
//! The cooldown is claimed before authorization so two near-simultaneous
//! invocations from one user cannot both pass the gate, and released again
//! on refusal so only dispatched commands consume the window.

use std::sync::Arc;

use tracing::{debug, error, warn};

use courier_gateway::{AlertSink, Invocation, Reply, Responder};
use courier_store::{AccountFilter, AccountStore};

use crate::cooldown::CooldownGate;
use crate::commands::handler::CommandContext;
use crate::commands::registry::CommandRegistry;

/// Dispatches inbound invocations to registered command handlers.
pub struct Dispatcher {
    registry: CommandRegistry,
    cooldown: CooldownGate,
    store: Arc<dyn AccountStore>,
    alerts: Arc<dyn AlertSink>,
}

impl Dispatcher {
    pub fn new(
        registry: CommandRegistry,
        cooldown: CooldownGate,
        store: Arc<dyn AccountStore>,
        alerts: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            registry,
            cooldown,
            store,
            alerts,
        }
    }

    /// The registry backing this dispatcher, for platform registration
    /// and command listings.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Process one inbound invocation to completion.
    ///
    /// Never returns an error: every failure path ends in either a
    /// user-facing refusal or an operator alert.
    pub async fn dispatch(&self, invocation: &Invocation, responder: &dyn Responder) {
        if invocation.guild_id.is_none() {
            debug!(command = %invocation.command, "ignoring invocation without guild context");
            return;
        }

        let Some(cmd) = self.registry.lookup(&invocation.command) else {
            debug!(command = %invocation.command, "ignoring unknown command");
            return;
        };

        let account = match self
            .store
            .find_one(&AccountFilter::ByUserId(invocation.user_id.clone()))
            .await
        {
            Ok(account) => account,
            Err(e) => {
                error!(command = %invocation.command, "account lookup failed: {e}");
                self.alerts.report(&e.to_string()).await;
                return;
            }
        };

        if !self.cooldown.try_acquire(&invocation.user_id) {
            let notice = format!("You're on cooldown for `{}s`!", self.cooldown.window().as_secs());
            if let Err(e) = responder.ack(Reply::private(notice)).await {
                warn!("failed to send cooldown notice: {e}");
            }
            return;
        }

        if account.is_none() && cmd.requires_account() {
            self.cooldown.release(&invocation.user_id);
            if let Err(e) = responder
                .ack(Reply::private("Run `/signup` or `/login` first!"))
                .await
            {
                warn!("failed to send signup prompt: {e}");
            }
            return;
        }

        let ctx = CommandContext {
            invocation,
            account,
            visibility: cmd.visibility(),
            store: self.store.as_ref(),
            responder,
            alerts: self.alerts.as_ref(),
        };

        if let Err(e) = cmd.execute(&ctx).await {
            error!(command = %invocation.command, "handler failed: {e}");
            self.alerts.report(&e.to_string()).await;
        }
    }
}
