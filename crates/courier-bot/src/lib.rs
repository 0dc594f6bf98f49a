//! Command dispatch and account-state mutation core.
//!
//! Maps inbound platform invocations to named operations, gates them
//! behind a per-user cooldown and a linked-account check, and runs the
//! handlers that mutate account documents through the store adapter.
//!
//! - [`similarity`]: bigram-overlap string similarity for search/delete.
//! - [`cooldown`]: the per-user re-entry gate.
//! - [`dateformat`]: the calendar-string formatter used on stored records.
//! - [`commands`]: the command trait, registry, dispatcher, and handlers.
//! - [`bootstrap`]: runtime assembly from [`courier_types::BotConfig`].

pub mod bootstrap;
pub mod commands;
pub mod cooldown;
pub mod dateformat;
pub mod similarity;

pub use bootstrap::build_dispatcher;
pub use commands::dispatcher::Dispatcher;
pub use commands::registry::CommandRegistry;
pub use commands::register_builtins;
pub use cooldown::CooldownGate;
