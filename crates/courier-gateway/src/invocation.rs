//! Inbound command invocations.

use serde::{Deserialize, Serialize};

/// A command invocation received from the platform gateway.
///
/// Options are named string values; the platform enforces each command's
/// declared parameter schema before the invocation reaches us, so a missing
/// required option indicates a misbehaving gateway rather than user error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// The invoked command name.
    pub command: String,
    /// Opaque platform identity of the invoking user. Distinct from any
    /// account username.
    pub user_id: String,
    /// The guild/server context, if any. Invocations without one are
    /// ignored by the dispatcher.
    pub guild_id: Option<String>,
    /// Named string parameters, in declaration order.
    pub options: Vec<(String, String)>,
}

impl Invocation {
    /// Build an invocation with no options.
    pub fn new(
        command: impl Into<String>,
        user_id: impl Into<String>,
        guild_id: Option<String>,
    ) -> Self {
        Self {
            command: command.into(),
            user_id: user_id.into(),
            guild_id,
            options: Vec::new(),
        }
    }

    /// Add a named option (builder style).
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push((name.into(), value.into()));
        self
    }

    /// Look up an option value by name.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}
