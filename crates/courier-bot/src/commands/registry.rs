//! Command registry: the static table of named operations.

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::Command;

/// Registry of command definitions, keyed by lowercase name.
///
/// Populated once at startup; the dispatcher and the platform
/// registration layer both read from it.
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command under its primary name.
    ///
    /// Overwrites any previous registration for the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let arc: Arc<dyn Command> = Arc::from(cmd);
        self.commands.insert(arc.name().to_lowercase(), arc);
    }

    /// Look up a command by name (case-insensitive).
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(&name.to_lowercase()).cloned()
    }

    /// All registered commands, sorted by name.
    pub fn list(&self) -> Vec<Arc<dyn Command>> {
        let mut commands: Vec<Arc<dyn Command>> = self.commands.values().cloned().collect();
        commands.sort_by(|a, b| a.name().cmp(b.name()));
        commands
    }

    /// All registered command names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
