//! Account lifecycle handlers: signup, login, account info, settings,
//! inbox protection.

use async_trait::async_trait;

use courier_store::{AccountFilter, AccountStore, AccountUpdate};
use courier_types::{Account, CourierError, MAX_PASSWORD_LEN, MAX_USERNAME_LEN, MIN_PASSWORD_LEN};

use crate::dateformat;

use super::handler::{Command, CommandContext, CommandGroup, ParamSpec};

// ---------------------------------------------------------------------------
// SignupCommand
// ---------------------------------------------------------------------------

/// Creates a fresh, unlinked account after validating the credentials.
///
/// Validation order is load-bearing: already-linked, username taken,
/// username too long, password out of bounds. Boundary lengths (25-char
/// username, 8- and 32-char passwords) are accepted.
pub struct SignupCommand;

#[async_trait]
impl Command for SignupCommand {
    fn name(&self) -> &str {
        "signup"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Signs you up for my services."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::required("username", "The username for the account."),
            ParamSpec::required("password", "The password for the account."),
        ]
    }

    fn requires_account(&self) -> bool {
        false
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        if ctx.account.is_some() {
            return ctx.ack("You've already signed up!").await;
        }

        let username = ctx.require_option("username")?.to_string();
        let password = ctx.require_option("password")?.to_string();

        let taken = ctx
            .store
            .find_one(&AccountFilter::ByUsername(username.clone()))
            .await?
            .is_some();
        if taken {
            return ctx
                .ack("That username is already under an account!")
                .await;
        }

        if username.chars().count() > MAX_USERNAME_LEN {
            return ctx
                .ack("The account username cannot be over `25` letters!")
                .await;
        }

        let password_len = password.chars().count();
        if password_len < MIN_PASSWORD_LEN || password_len > MAX_PASSWORD_LEN {
            return ctx
                .ack("The account password cannot be under `8` letters, or over `32` letters!")
                .await;
        }

        ctx.store
            .insert_one(Account::new(&username, &password, dateformat::today()))
            .await?;

        ctx.ack(format!(
            "You've signed up as `@{username}`, congrats! Now, run `/login`."
        ))
        .await
    }
}

// ---------------------------------------------------------------------------
// LoginCommand
// ---------------------------------------------------------------------------

/// Links the invoker's platform identity to an account.
///
/// Two sequential, non-atomic updates: first any account holding the
/// identity is unlinked, then the target account is linked. A failure
/// between the two leaves the identity unlinked; the next login retries
/// the migration.
pub struct LoginCommand;

#[async_trait]
impl Command for LoginCommand {
    fn name(&self) -> &str {
        "login"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Logs you into an account."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::required("username", "The username for the account."),
            ParamSpec::required("password", "The password for the account."),
        ]
    }

    fn requires_account(&self) -> bool {
        false
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let username = ctx.require_option("username")?.to_string();
        let password = ctx.require_option("password")?.to_string();

        let credentials = AccountFilter::ByCredentials {
            username: username.clone(),
            password,
        };

        if ctx.store.find_one(&credentials).await?.is_none() {
            return ctx
                .ack("Those credentials don't match any account!")
                .await;
        }

        ctx.ack("Logging you out of any previous account...")
            .await?;

        ctx.store
            .update_one(
                &AccountFilter::ByUserId(ctx.user_id().to_string()),
                AccountUpdate::SetUserId(String::new()),
            )
            .await?;

        ctx.edit_text("Logging into the account...").await?;

        ctx.store
            .update_one(&credentials, AccountUpdate::SetUserId(ctx.user_id().to_string()))
            .await?;

        ctx.edit_text(format!("You are now logged into `@{username}`!"))
            .await
    }
}

// ---------------------------------------------------------------------------
// AccountCommand
// ---------------------------------------------------------------------------

/// Shows info on the invoker's account.
///
/// Echoes the stored plaintext password, a legacy-parity behavior that
/// goes through the account type's insecure accessor.
pub struct AccountCommand;

#[async_trait]
impl Command for AccountCommand {
    fn name(&self) -> &str {
        "account"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Shows info on the account you're using."
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let account = ctx.require_account()?;

        let info = [
            format!("Username: `@{}`", account.username),
            format!("Sign Up Date: `{}`", account.sign_up_date),
            format!("Emails Sent: `{}`", account.sent_emails.len()),
            format!("Inbox Size: `{}`", account.inboxed_emails.len()),
            format!("Contact List Size: `{}`", account.contact_list.len()),
            format!("Block List Size: `{}`", account.block_list.len()),
            format!("Password: `{}`", account.password_plaintext_insecure()),
        ]
        .join("\n");

        ctx.ack(format!("This account's info.\n{info}")).await
    }
}

// ---------------------------------------------------------------------------
// SettingsCommand
// ---------------------------------------------------------------------------

/// Shows inbox protection and the inert two-factor state.
pub struct SettingsCommand;

#[async_trait]
impl Command for SettingsCommand {
    fn name(&self) -> &str {
        "settings"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Shows all settings."
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let account = ctx.require_account()?;
        let two_factor = &account.two_factor;

        // Blank question/answer render as a single space, as they always have.
        let question = if two_factor.question.is_empty() {
            " "
        } else {
            &two_factor.question
        };
        let answer = if two_factor.answer.is_empty() {
            " "
        } else {
            &two_factor.answer
        };

        ctx.ack(format!(
            "These are the current account settings.\n\
             Inbox Protection: `{}`\n\
             2FA: `{}`\n\
             **>** Question: `{question}`\n\
             **>** Answer: `{answer}`",
            account.protect_inbox, two_factor.active,
        ))
        .await
    }
}

// ---------------------------------------------------------------------------
// ProtectionCommand
// ---------------------------------------------------------------------------

/// Toggles inbox protection.
///
/// Any status other than the literal `"off"` turns protection on.
pub struct ProtectionCommand;

#[async_trait]
impl Command for ProtectionCommand {
    fn name(&self) -> &str {
        "protection"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Turns inbox protection on or off."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![ParamSpec::required("status", "On or off.")]
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let status = ctx.require_option("status")?.to_string();
        let enabled = status != "off";

        ctx.store
            .update_one(
                &AccountFilter::ByUserId(ctx.user_id().to_string()),
                AccountUpdate::SetProtectInbox(enabled),
            )
            .await?;

        ctx.ack(format!("Inbox protection toggled `{status}`."))
            .await
    }
}
