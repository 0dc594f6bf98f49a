//! Contact and block list handlers.
//!
//! Both lists are per-account username sets; neither relation is
//! symmetric. Blocking removes the target from the contact list, keeping
//! the two disjoint.

use async_trait::async_trait;

use courier_store::{AccountFilter, AccountStore, AccountUpdate};
use courier_types::CourierError;

use super::handler::{Command, CommandContext, CommandGroup, ParamSpec};

/// Look up a target username, replying and returning `false` when it is
/// not under any account.
async fn target_exists(ctx: &CommandContext<'_>, username: &str) -> Result<bool, CourierError> {
    let found = ctx
        .store
        .find_one(&AccountFilter::ByUsername(username.to_string()))
        .await?
        .is_some();

    if !found {
        ctx.ack("That username isn't under any account!")
            .await?;
    }
    Ok(found)
}

// ---------------------------------------------------------------------------
// AddContactCommand
// ---------------------------------------------------------------------------

/// Adds a username to the invoker's contact list.
///
/// Refused while the target is blocked; unblock first.
pub struct AddContactCommand;

#[async_trait]
impl Command for AddContactCommand {
    fn name(&self) -> &str {
        "addcontact"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Adds a contact to the list."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![ParamSpec::required("username", "The username for the contact.")]
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let username = ctx.require_option("username")?.to_string();
        let account = ctx.require_account()?;

        if !target_exists(ctx, &username).await? {
            return Ok(());
        }

        if account.has_blocked(&username) {
            return ctx.ack("You've blocked that account!").await;
        }

        ctx.store
            .update_one(
                &AccountFilter::ByUserId(ctx.user_id().to_string()),
                AccountUpdate::AddContact(username.clone()),
            )
            .await?;

        ctx.ack(format!("`@{username}` has been added to the contact list."))
            .await
    }
}

// ---------------------------------------------------------------------------
// DelContactCommand
// ---------------------------------------------------------------------------

/// Removes a username from the invoker's contact list.
pub struct DelContactCommand;

#[async_trait]
impl Command for DelContactCommand {
    fn name(&self) -> &str {
        "delcontact"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Deletes a contact from the list."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![ParamSpec::required("username", "The username for the contact.")]
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let username = ctx.require_option("username")?.to_string();

        if !target_exists(ctx, &username).await? {
            return Ok(());
        }

        ctx.store
            .update_one(
                &AccountFilter::ByUserId(ctx.user_id().to_string()),
                AccountUpdate::RemoveContact(username.clone()),
            )
            .await?;

        ctx.ack(format!(
            "`@{username}` has been deleted from the contact list."
        ))
        .await
    }
}

// ---------------------------------------------------------------------------
// ContactsCommand
// ---------------------------------------------------------------------------

/// Lists the invoker's contacts.
pub struct ContactsCommand;

#[async_trait]
impl Command for ContactsCommand {
    fn name(&self) -> &str {
        "contacts"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Lists the contacts."
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let account = ctx.require_account()?;

        let names = format_name_list(account.contact_list.keys());

        ctx.ack(format!(
            "Emails from contacts get inboxed normally.\n{names}"
        ))
        .await
    }
}

// ---------------------------------------------------------------------------
// BlockCommand
// ---------------------------------------------------------------------------

/// Blocks an account: adds to the block list, then drops it from the
/// contact list. Two sequential updates on the invoker's document.
pub struct BlockCommand;

#[async_trait]
impl Command for BlockCommand {
    fn name(&self) -> &str {
        "block"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Blocks an account."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![ParamSpec::required("username", "The username to block.")]
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let username = ctx.require_option("username")?.to_string();

        if !target_exists(ctx, &username).await? {
            return Ok(());
        }

        let invoker = AccountFilter::ByUserId(ctx.user_id().to_string());

        ctx.store
            .update_one(&invoker, AccountUpdate::AddBlocked(username.clone()))
            .await?;
        ctx.store
            .update_one(&invoker, AccountUpdate::RemoveContact(username.clone()))
            .await?;

        ctx.ack(format!("`@{username}` has been blocked.")).await
    }
}

// ---------------------------------------------------------------------------
// UnblockCommand
// ---------------------------------------------------------------------------

/// Removes an account from the block list.
///
/// Does not restore any contact entry the block removed.
pub struct UnblockCommand;

#[async_trait]
impl Command for UnblockCommand {
    fn name(&self) -> &str {
        "unblock"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Unblocks an account."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![ParamSpec::required("username", "The username to unblock.")]
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let username = ctx.require_option("username")?.to_string();

        if !target_exists(ctx, &username).await? {
            return Ok(());
        }

        ctx.store
            .update_one(
                &AccountFilter::ByUserId(ctx.user_id().to_string()),
                AccountUpdate::RemoveBlocked(username.clone()),
            )
            .await?;

        ctx.ack(format!("`@{username}` has been unblocked.")).await
    }
}

// ---------------------------------------------------------------------------
// BlockedCommand
// ---------------------------------------------------------------------------

/// Lists the blocked accounts.
pub struct BlockedCommand;

#[async_trait]
impl Command for BlockedCommand {
    fn name(&self) -> &str {
        "blocked"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Lists the blocked accounts."
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let account = ctx.require_account()?;

        let names = format_name_list(account.block_list.keys());

        ctx.ack(format!(
            "Emails from blocked accounts will not be received.\n{names}"
        ))
        .await
    }
}

/// Render usernames as `` `@name` `` joined by commas, or the `` `...` ``
/// placeholder for an empty list.
fn format_name_list<'a>(names: impl Iterator<Item = &'a String>) -> String {
    let rendered: Vec<String> = names.map(|name| format!("`@{name}`")).collect();
    if rendered.is_empty() {
        "`...`".to_string()
    } else {
        rendered.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_gateway::testing::{RecordingAlertSink, RecordingResponder};
    use courier_gateway::Invocation;
    use courier_types::Account;
    use courier_store::MemoryAccountStore;

    fn seeded_store() -> MemoryAccountStore {
        let store = MemoryAccountStore::new();
        let mut invoker = Account::new("mika", "hunter2hunter2", "January 1st, 2022");
        invoker.user_id = "id-1".into();
        store.seed(invoker);
        store.seed(Account::new("rin", "hunter2hunter2", "January 1st, 2022"));
        store
    }

    async fn run(
        store: &MemoryAccountStore,
        cmd: &dyn Command,
        invocation: &Invocation,
    ) -> RecordingResponder {
        let responder = RecordingResponder::new();
        let alerts = RecordingAlertSink::new();
        let ctx = CommandContext {
            invocation,
            account: store.get("mika"),
            visibility: cmd.visibility(),
            store,
            responder: &responder,
            alerts: &alerts,
        };
        cmd.execute(&ctx).await.unwrap();
        responder
    }

    fn with_target(command: &str, username: &str) -> Invocation {
        Invocation::new(command, "id-1", Some("guild-1".to_string()))
            .with_option("username", username)
    }

    #[tokio::test]
    async fn addcontact_rejects_unknown_username() {
        let store = seeded_store();
        let responder = run(&store, &AddContactCommand, &with_target("addcontact", "ghost")).await;
        assert_eq!(
            responder.only_ack().text,
            "That username isn't under any account!"
        );
        assert!(!store.get("mika").unwrap().is_contact("ghost"));
    }

    #[tokio::test]
    async fn addcontact_adds_to_list() {
        let store = seeded_store();
        let responder = run(&store, &AddContactCommand, &with_target("addcontact", "rin")).await;
        assert_eq!(
            responder.only_ack().text,
            "`@rin` has been added to the contact list."
        );
        assert!(store.get("mika").unwrap().is_contact("rin"));
    }

    #[tokio::test]
    async fn addcontact_refuses_blocked_target() {
        let store = seeded_store();
        run(&store, &BlockCommand, &with_target("block", "rin")).await;

        let responder = run(&store, &AddContactCommand, &with_target("addcontact", "rin")).await;
        assert_eq!(responder.only_ack().text, "You've blocked that account!");
        assert!(!store.get("mika").unwrap().is_contact("rin"));
    }

    #[tokio::test]
    async fn block_removes_existing_contact() {
        let store = seeded_store();
        run(&store, &AddContactCommand, &with_target("addcontact", "rin")).await;
        assert!(store.get("mika").unwrap().is_contact("rin"));

        let responder = run(&store, &BlockCommand, &with_target("block", "rin")).await;
        assert_eq!(responder.only_ack().text, "`@rin` has been blocked.");

        let mika = store.get("mika").unwrap();
        assert!(mika.has_blocked("rin"));
        assert!(!mika.is_contact("rin"));
    }

    #[tokio::test]
    async fn unblock_clears_the_block_but_not_the_contact_entry() {
        let store = seeded_store();
        run(&store, &BlockCommand, &with_target("block", "rin")).await;

        let responder = run(&store, &UnblockCommand, &with_target("unblock", "rin")).await;
        assert_eq!(responder.only_ack().text, "`@rin` has been unblocked.");

        let mika = store.get("mika").unwrap();
        assert!(!mika.has_blocked("rin"));
        assert!(!mika.is_contact("rin"));
    }

    #[tokio::test]
    async fn delcontact_removes_entry() {
        let store = seeded_store();
        run(&store, &AddContactCommand, &with_target("addcontact", "rin")).await;

        let responder = run(&store, &DelContactCommand, &with_target("delcontact", "rin")).await;
        assert_eq!(
            responder.only_ack().text,
            "`@rin` has been deleted from the contact list."
        );
        assert!(!store.get("mika").unwrap().is_contact("rin"));
    }

    #[tokio::test]
    async fn listings_use_placeholder_when_empty() {
        let store = seeded_store();

        let invocation = Invocation::new("contacts", "id-1", Some("guild-1".to_string()));
        let responder = run(&store, &ContactsCommand, &invocation).await;
        assert!(responder.only_ack().text.contains("`...`"));

        let invocation = Invocation::new("blocked", "id-1", Some("guild-1".to_string()));
        let responder = run(&store, &BlockedCommand, &invocation).await;
        assert!(responder.only_ack().text.contains("`...`"));
    }

    #[tokio::test]
    async fn contacts_listing_shows_names() {
        let store = seeded_store();
        run(&store, &AddContactCommand, &with_target("addcontact", "rin")).await;

        let invocation = Invocation::new("contacts", "id-1", Some("guild-1".to_string()));
        let responder = run(&store, &ContactsCommand, &invocation).await;
        assert!(responder.only_ack().text.contains("`@rin`"));
    }
}
