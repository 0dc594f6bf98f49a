//! Per-user command cooldown gate.
//!
//! A shared set of identities currently inside the cooldown window.
//! Acquisition is an atomic check-and-insert, so two near-simultaneous
//! invocations from the same user let at most one through; entries expire
//! automatically after the window elapses. The gate is owned by the
//! dispatcher and injected, never process-global.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Lock the entry set, recovering from poisoning. The map holds no
/// invariant a panicking holder could break, so the data stays usable.
fn lock(entries: &Mutex<HashMap<String, u64>>) -> MutexGuard<'_, HashMap<String, u64>> {
    entries.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Expiring set of identities that may not trigger another gated command.
///
/// Each entry carries a generation token so a scheduled expiry only
/// removes the acquisition that created it, not a later re-acquisition of
/// the same identity.
#[derive(Clone)]
pub struct CooldownGate {
    window: Duration,
    entries: Arc<Mutex<HashMap<String, u64>>>,
    next_token: Arc<AtomicU64>,
}

impl CooldownGate {
    /// Create a gate with the given cooldown window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: Arc::new(Mutex::new(HashMap::new())),
            next_token: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The configured cooldown window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Atomically claim the gate for `user_id`.
    ///
    /// Returns `false` if the identity is already inside the window. On
    /// success the entry is scheduled for automatic removal once the
    /// window elapses. Must be called from within a tokio runtime.
    pub fn try_acquire(&self, user_id: &str) -> bool {
        let token = self.next_token.fetch_add(1, Ordering::Relaxed);

        {
            let mut entries = lock(&self.entries);
            if entries.contains_key(user_id) {
                return false;
            }
            entries.insert(user_id.to_string(), token);
        }

        let entries = Arc::clone(&self.entries);
        let user_id = user_id.to_string();
        let window = self.window;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let mut entries = lock(&entries);
            if entries.get(&user_id) == Some(&token) {
                entries.remove(&user_id);
            }
        });

        true
    }

    /// Remove an entry before its window elapses.
    ///
    /// Used when dispatch is refused after the gate was already claimed,
    /// so a rejected invocation does not consume the user's window.
    pub fn release(&self, user_id: &str) {
        lock(&self.entries).remove(user_id);
    }

    /// Whether `user_id` is currently inside the window.
    pub fn is_active(&self, user_id: &str) -> bool {
        lock(&self.entries).contains_key(user_id)
    }
}
