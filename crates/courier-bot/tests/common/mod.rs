//! Shared helpers for integration tests.
//!
//! Each integration test file compiles common/ as its own module, so not
//! every helper is used in every file.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use courier_bot::{register_builtins, CommandRegistry, CooldownGate, Dispatcher};
use courier_gateway::testing::RecordingAlertSink;
use courier_gateway::Invocation;
use courier_store::{AccountStore, MemoryAccountStore};
use courier_types::Account;

pub const COOLDOWN: Duration = Duration::from_secs(3);

/// Build a dispatcher over the given store with every command registered,
/// returning the alert sink for assertions on operator reports.
pub fn dispatcher_over(store: Arc<dyn AccountStore>) -> (Dispatcher, Arc<RecordingAlertSink>) {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);

    let alerts = Arc::new(RecordingAlertSink::new());
    let dispatcher = Dispatcher::new(
        registry,
        CooldownGate::new(COOLDOWN),
        store,
        alerts.clone(),
    );
    (dispatcher, alerts)
}

/// A dispatcher backed by a fresh in-memory store.
pub fn memory_dispatcher() -> (Dispatcher, Arc<MemoryAccountStore>, Arc<RecordingAlertSink>) {
    let store = Arc::new(MemoryAccountStore::new());
    let (dispatcher, alerts) = dispatcher_over(store.clone());
    (dispatcher, store, alerts)
}

/// An account already linked to a platform identity.
pub fn linked_account(username: &str, user_id: &str) -> Account {
    let mut account = Account::new(username, "hunter2hunter2", "January 1st, 2022");
    account.user_id = user_id.into();
    account
}

/// An invocation from inside a guild, the normal case.
pub fn guild_invocation(command: &str, user_id: &str) -> Invocation {
    Invocation::new(command, user_id, Some("guild-1".to_string()))
}
