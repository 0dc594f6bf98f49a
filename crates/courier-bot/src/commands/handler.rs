//! Core command types: context, parameter schema, and the command trait.
//!
//! Every operation implements [`Command`], which declares metadata (name,
//! group, description, parameter schema, response visibility, whether a
//! linked account is required) and an async `execute`. Handlers receive a
//! [`CommandContext`] holding the invocation, the invoker's account (when
//! one is linked), and the store/responder/alert collaborators.

use async_trait::async_trait;

use courier_gateway::{AlertSink, Invocation, Reply, ReplyEdit, Responder, Visibility};
use courier_store::AccountStore;
use courier_types::{Account, CourierError};

/// Cosmetic command grouping, used for listings and platform registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Fun,
    Personal,
}

/// One declared string parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

impl ParamSpec {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: true,
        }
    }
}

/// Execution context passed to every command handler.
pub struct CommandContext<'a> {
    /// The inbound invocation (command name, invoker identity, options).
    pub invocation: &'a Invocation,
    /// The invoker's account, when their identity is linked to one.
    /// Always present for commands that require an account.
    pub account: Option<Account>,
    /// The command's declared visibility; every ack goes out with it.
    pub visibility: Visibility,
    pub store: &'a dyn AccountStore,
    pub responder: &'a dyn Responder,
    pub alerts: &'a dyn AlertSink,
}

impl CommandContext<'_> {
    /// The invoking platform identity.
    pub fn user_id(&self) -> &str {
        &self.invocation.user_id
    }

    /// A required option's value.
    ///
    /// The platform enforces the declared schema, so absence means the
    /// gateway misbehaved; surfaced as an invocation error, not a user
    /// message.
    pub fn require_option(&self, name: &str) -> Result<&str, CourierError> {
        self.invocation.option(name).ok_or_else(|| {
            CourierError::InvalidInvocation(format!(
                "missing required option {name:?} for /{}",
                self.invocation.command
            ))
        })
    }

    /// The invoker's account, for handlers that declared they require one.
    pub fn require_account(&self) -> Result<&Account, CourierError> {
        self.account.as_ref().ok_or_else(|| {
            CourierError::InvalidInvocation(format!(
                "/{} dispatched without a linked account",
                self.invocation.command
            ))
        })
    }

    /// Send the acknowledgment with the command's declared visibility.
    pub async fn ack(&self, text: impl Into<String>) -> Result<(), CourierError> {
        self.responder
            .ack(Reply {
                text: text.into(),
                visibility: self.visibility,
            })
            .await?;
        Ok(())
    }

    /// Edit the acknowledged response with plain text.
    pub async fn edit_text(&self, text: impl Into<String>) -> Result<(), CourierError> {
        self.responder.edit(ReplyEdit::text(text)).await?;
        Ok(())
    }

    /// Edit the acknowledged response.
    pub async fn edit(&self, edit: ReplyEdit) -> Result<(), CourierError> {
        self.responder.edit(edit).await?;
        Ok(())
    }
}

/// Trait every operation implements.
///
/// The dispatcher enforces the cooldown and linked-account gates before
/// calling `execute`; handlers own validation of their parameters and the
/// full response lifecycle (one ack, optional edits).
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary command name, lowercase.
    fn name(&self) -> &str;

    /// Cosmetic group.
    fn group(&self) -> CommandGroup;

    /// One-line description shown in listings and platform registration.
    fn description(&self) -> &str;

    /// Declared parameter schema, in platform registration order.
    fn params(&self) -> Vec<ParamSpec> {
        vec![]
    }

    /// Declared response visibility. A per-command property, never
    /// recomputed per invocation.
    fn visibility(&self) -> Visibility {
        Visibility::Private
    }

    /// Whether dispatch requires the invoker to have a linked account.
    /// Only the signup/login pair opts out.
    fn requires_account(&self) -> bool {
        true
    }

    /// Execute the command.
    ///
    /// Validation failures are user-facing replies followed by `Ok`;
    /// `Err` is reserved for store/gateway failures, which the dispatcher
    /// reports to the operator channel without a user-visible response.
    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError>;
}
