//! The command system.
//!
//! - [`handler`]: [`Command`] trait, [`CommandContext`], parameter schema.
//! - [`registry`]: [`CommandRegistry`] storing the static operation table.
//! - [`dispatcher`]: [`Dispatcher`] running the gate checks and handlers.
//! - [`account`]: signup, login, account info, settings, protection.
//! - [`contacts`]: contact and block list management.
//! - [`mail`]: email send, folders, search, deletion.
//! - [`info`]: ping and informational commands.

pub mod account;
pub mod contacts;
pub mod dispatcher;
pub mod handler;
pub mod info;
pub mod mail;
pub mod registry;

pub use handler::{Command, CommandContext, CommandGroup, ParamSpec};
pub use registry::CommandRegistry;

/// Register every command into the given registry.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(account::SignupCommand));
    registry.register(Box::new(account::LoginCommand));
    registry.register(Box::new(account::AccountCommand));
    registry.register(Box::new(account::SettingsCommand));
    registry.register(Box::new(account::ProtectionCommand));

    registry.register(Box::new(contacts::AddContactCommand));
    registry.register(Box::new(contacts::DelContactCommand));
    registry.register(Box::new(contacts::ContactsCommand));
    registry.register(Box::new(contacts::BlockCommand));
    registry.register(Box::new(contacts::UnblockCommand));
    registry.register(Box::new(contacts::BlockedCommand));

    registry.register(Box::new(mail::EmailCommand));
    registry.register(Box::new(mail::InboxCommand));
    registry.register(Box::new(mail::SentCommand));
    registry.register(Box::new(mail::SearchCommand));
    registry.register(Box::new(mail::DeleteCommand));
    registry.register(Box::new(mail::DeleteAllCommand));

    registry.register(Box::new(info::PingCommand));
    registry.register(Box::new(info::DocsCommand));
    registry.register(Box::new(info::PolicyCommand));
    registry.register(Box::new(info::TermsCommand));

    // Registered last so its listing covers everything above plus itself.
    let mut names = registry.names();
    names.push("commands".to_string());
    names.sort();
    registry.register(Box::new(info::CommandsCommand { names }));
}
