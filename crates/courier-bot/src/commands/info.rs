//! Informational commands: latency check, command listing, and the
//! static docs/policy/terms pages.

use std::time::Instant;

use async_trait::async_trait;

use courier_gateway::Visibility;
use courier_store::{AccountFilter, AccountStore};
use courier_types::CourierError;

use super::handler::{Command, CommandContext, CommandGroup};

// ---------------------------------------------------------------------------
// PingCommand
// ---------------------------------------------------------------------------

/// Reports gateway and database round-trip latency.
pub struct PingCommand;

#[async_trait]
impl Command for PingCommand {
    fn name(&self) -> &str {
        "ping"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Fun
    }

    fn description(&self) -> &str {
        "Pong!"
    }

    fn visibility(&self) -> Visibility {
        Visibility::Broadcast
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let start = Instant::now();
        ctx.ack("Pinging...").await?;
        let api = start.elapsed().as_millis();

        let start = Instant::now();
        ctx.store
            .find_one(&AccountFilter::ByUserId(ctx.user_id().to_string()))
            .await?;
        let db = start.elapsed().as_millis();

        ctx.edit_text(format!(
            "API Latency: `{api}ms`\nDatabase Latency: `{db}ms`"
        ))
        .await
    }
}

// ---------------------------------------------------------------------------
// CommandsCommand
// ---------------------------------------------------------------------------

/// Lists every registered command.
///
/// The listing is captured at registration time, after every other
/// command has been added, so the registry stays immutable afterwards.
pub struct CommandsCommand {
    pub names: Vec<String>,
}

#[async_trait]
impl Command for CommandsCommand {
    fn name(&self) -> &str {
        "commands"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Fun
    }

    fn description(&self) -> &str {
        "Shows the list of commands."
    }

    fn visibility(&self) -> Visibility {
        Visibility::Broadcast
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let listing: Vec<String> = self.names.iter().map(|name| format!("`/{name}`")).collect();

        ctx.ack(format!("Slash Commands\n{}", listing.join(", ")))
            .await
    }
}

// ---------------------------------------------------------------------------
// DocsCommand
// ---------------------------------------------------------------------------

/// The user-facing guide.
pub struct DocsCommand;

#[async_trait]
impl Command for DocsCommand {
    fn name(&self) -> &str {
        "docs"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Fun
    }

    fn description(&self) -> &str {
        "Shows the docs/guide."
    }

    fn visibility(&self) -> Visibility {
        Visibility::Broadcast
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        ctx.ack(
            "These are the docs for my services.\n\n\
             Contacts\n\
             Emails from contacts get sorted under the `Normal` inbox category. \
             Contacts are like friends, and can be removed and added as you please. \
             There might be more potential for contacts in the future, but the only \
             perk that comes with being a contact is being recognized as someone \
             with more access than a normal account.\n\n\
             Blocking\n\
             Blocking an account means they can't send you any emails whatsoever, \
             and it will automatically remove them from the contacts list. This \
             actually saves database space, so it is suggested to block those you \
             don't want contacting you through my services.\n\n\
             Emails\n\
             An email contains the recipients, author, date, title, and content. \
             To put new lines in an email, use \"`\\n`\". When searching emails, \
             they are returned in a list of files. The file contains all necessary \
             info, and is titled what the email was titled. This makes it easy to \
             store larger emails and makes them downloadable. When searching \
             through emails, any title or content that is **40%** similar to the \
             search body will be pulled.\n\n\
             Slash Commands\n\
             Some command responses will only be visible to the account who runs \
             said command(s). Everything is done through slash commands, and \
             message commands will never be available.\n\n\
             Settings\n\
             `Inbox protection` prevents any emails **NOT** from contacts from \
             sending, and saves database space for those who don't want to be \
             emailed by strangers. `2FA` puts an additional question for the user \
             logging in to get access, making it more secure for the creator of \
             the account. `2FA` has yet to arrive.\n\n\
             Errors\n\
             If the bot doesn't respond or stops working, that means an error has \
             appeared. Usually, if the bot continues to work, it is sent to my \
             developers and handled.",
        )
        .await
    }
}

// ---------------------------------------------------------------------------
// PolicyCommand
// ---------------------------------------------------------------------------

/// The privacy policy page.
pub struct PolicyCommand;

#[async_trait]
impl Command for PolicyCommand {
    fn name(&self) -> &str {
        "policy"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Fun
    }

    fn description(&self) -> &str {
        "Shows the privacy policy."
    }

    fn visibility(&self) -> Visibility {
        Visibility::Broadcast
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        ctx.ack(
            "The privacy policy describes Courier's DOs and DON'Ts.\n\n\
             Policy\n\
             The only data stored by Courier is `custom data`, as well as your \
             `user ID`. We do not store your actual platform account's password, \
             or anything related to it. Courier acts as its own service when it \
             comes to accounts, meaning your Courier account is only related to \
             Courier, nothing else. Furthermore, if you wish to have your data \
             removed from the database, you may contact one of the developers of \
             Courier.",
        )
        .await
    }
}

// ---------------------------------------------------------------------------
// TermsCommand
// ---------------------------------------------------------------------------

/// The terms-of-service page. There is exactly one term.
pub struct TermsCommand;

#[async_trait]
impl Command for TermsCommand {
    fn name(&self) -> &str {
        "terms"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Fun
    }

    fn description(&self) -> &str {
        "Shows the term(s) of service."
    }

    fn visibility(&self) -> Visibility {
        Visibility::Broadcast
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        ctx.ack(
            "Your account can be deleted whenever, for any reason. that is the only term.",
        )
        .await
    }
}
