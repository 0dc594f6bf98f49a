//! Email handlers: send, folder listings, fuzzy search, deletion.

use async_trait::async_trait;

use courier_gateway::{AlertSink, Attachment, ReplyEdit};
use courier_store::{AccountFilter, AccountStore, AccountUpdate};
use courier_types::{CourierError, Email};

use crate::dateformat;
use crate::similarity::{similarity, MAX_SEARCH_RESULTS, SIMILARITY_THRESHOLD};

use super::handler::{Command, CommandContext, CommandGroup, ParamSpec};

/// The exact separator recipients are split on. A bare comma does not
/// split; this matches the behavior existing users rely on.
const RECIPIENT_SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// EmailCommand
// ---------------------------------------------------------------------------

/// Sends an email to one or more recipients.
///
/// Each recipient is re-fetched and gated independently: delivery requires
/// the recipient's inbox to be open to the sender (protection off, or
/// sender in their contacts), the sender not to be blocked by them, and
/// the recipient not to be blocked by the sender. The record lands in the
/// recipient's inbox and the sender's sent folder as two separate updates;
/// a failure between them is alerted but not rolled back.
pub struct EmailCommand;

#[async_trait]
impl Command for EmailCommand {
    fn name(&self) -> &str {
        "email"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Sends an email."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::required(
                "usernames",
                "The usernames to send to (separate them with commas).",
            ),
            ParamSpec::required("title", "The title for the email."),
            ParamSpec::required("content", "The content for the email (the body)."),
        ]
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let sender = ctx.require_account()?.clone();
        let usernames: Vec<String> = ctx
            .require_option("usernames")?
            .split(RECIPIENT_SEPARATOR)
            .map(String::from)
            .collect();
        let title = ctx.require_option("title")?.to_string();
        let content = ctx.require_option("content")?.replace("\\n", "\n");

        ctx.ack("Sending emails...").await?;

        let entry = Email {
            author: sender.username.clone(),
            title,
            recipients: usernames.clone(),
            content,
            date: dateformat::today(),
        };

        let mut sent = 0;

        for username in &usernames {
            let recipient = match ctx
                .store
                .find_one(&AccountFilter::ByUsername(username.clone()))
                .await
            {
                Ok(Some(recipient)) => recipient,
                Ok(None) => continue,
                Err(e) => {
                    ctx.alerts.report(&e.to_string()).await;
                    continue;
                }
            };

            let inbox_open =
                !recipient.protect_inbox || recipient.is_contact(&sender.username);
            if !inbox_open
                || recipient.has_blocked(&sender.username)
                || sender.has_blocked(username)
            {
                continue;
            }

            if let Err(e) = ctx
                .store
                .update_one(
                    &AccountFilter::ByUsername(username.clone()),
                    AccountUpdate::PushInboxed(entry.clone()),
                )
                .await
            {
                ctx.alerts.report(&e.to_string()).await;
                continue;
            }

            sent += 1;

            // The sent-folder copy failing is a partial delivery: the
            // recipient keeps the email, the operator hears about it.
            if let Err(e) = ctx
                .store
                .update_one(
                    &AccountFilter::ByUserId(ctx.user_id().to_string()),
                    AccountUpdate::PushSent(entry.clone()),
                )
                .await
            {
                ctx.alerts.report(&e.to_string()).await;
            }
        }

        ctx.edit_text(format!("`{sent}` emails were sent, nice!")).await
    }
}

// ---------------------------------------------------------------------------
// InboxCommand
// ---------------------------------------------------------------------------

/// Lists inboxed emails, split into Normal (author is a contact) and
/// Unknown sections.
pub struct InboxCommand;

#[async_trait]
impl Command for InboxCommand {
    fn name(&self) -> &str {
        "inbox"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Lists your inboxed emails."
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let account = ctx.require_account()?;

        let mut normal = Vec::new();
        let mut unknown = Vec::new();

        for email in &account.inboxed_emails {
            let line = format!("`@{}`: {}", email.author, email.title);
            if account.is_contact(&email.author) {
                normal.push(line);
            } else {
                unknown.push(line);
            }
        }

        ctx.ack(format!(
            "To view any email(s), use the `/search` command.\n\n\
             Normal\n{}\n\n\
             Unknown\n{}",
            join_or_placeholder(normal),
            join_or_placeholder(unknown),
        ))
        .await
    }
}

// ---------------------------------------------------------------------------
// SentCommand
// ---------------------------------------------------------------------------

/// Lists all emails sent from the account.
pub struct SentCommand;

#[async_trait]
impl Command for SentCommand {
    fn name(&self) -> &str {
        "sent"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Shows all emails sent on this account."
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let account = ctx.require_account()?;

        let lines: Vec<String> = account
            .sent_emails
            .iter()
            .map(|email| format!("`@{}`: {}", email.author, email.title))
            .collect();

        ctx.ack(format!(
            "To view any email(s), use the `/search` command.\n\n{}",
            join_or_placeholder(lines),
        ))
        .await
    }
}

// ---------------------------------------------------------------------------
// SearchCommand
// ---------------------------------------------------------------------------

/// Fuzzy search over a folder; matches become downloadable text files.
///
/// An email matches when its title or content is at least 40% similar to
/// the search body. At most ten matches are returned.
pub struct SearchCommand;

#[async_trait]
impl Command for SearchCommand {
    fn name(&self) -> &str {
        "search"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Shows similar emails from a search."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::required("type", "The type of email to search for (inboxed or sent)."),
            ParamSpec::required("body", "The title/content to search through any emails for."),
        ]
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let account = ctx.require_account()?;
        let folder_kind = ctx.require_option("type")?;
        let body = ctx.require_option("body")?.to_string();

        ctx.ack("Searching through all emails...").await?;

        let folder = if folder_kind == "sent" {
            &account.sent_emails
        } else {
            &account.inboxed_emails
        };

        let mut attachments = Vec::new();
        for email in folder {
            if similarity(&body, &email.title) < SIMILARITY_THRESHOLD
                && similarity(&body, &email.content) < SIMILARITY_THRESHOLD
            {
                continue;
            }

            attachments.push(render_email_file(email));
            if attachments.len() >= MAX_SEARCH_RESULTS {
                break;
            }
        }

        let count = attachments.len();
        ctx.edit(ReplyEdit::with_attachments(
            format!("`{count}` emails were searched and pulled."),
            attachments,
        ))
        .await
    }
}

/// Render one email as its downloadable text artifact.
fn render_email_file(email: &Email) -> Attachment {
    let recipients: Vec<String> = email
        .recipients
        .iter()
        .map(|name| format!("@{name}"))
        .collect();

    Attachment::text_file(
        format!("{}.txt", email.title),
        format!(
            "Title: \"{}\"\nAuthor: @{}\nDate: {}\nRecipients: {}\nContent:\n\n{}",
            email.title,
            email.author,
            email.date,
            recipients.join(", "),
            email.content,
        ),
    )
}

// ---------------------------------------------------------------------------
// DeleteCommand
// ---------------------------------------------------------------------------

/// Deletes every email in a folder whose title matches exactly.
///
/// The folder sentinel is the literal `"sen"`: only that exact string
/// targets the sent folder, anything else targets the inbox. Known to
/// diverge from the `"sent"` sentinel the other folder commands use;
/// kept until a deliberate product decision changes it.
pub struct DeleteCommand;

#[async_trait]
impl Command for DeleteCommand {
    fn name(&self) -> &str {
        "delete"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Deletes an email of a type."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::required("type", "The type of email to delete (inboxed or sent)."),
            ParamSpec::required("title", "The title of the email to delete."),
        ]
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let account = ctx.require_account()?;
        let folder_kind = ctx.require_option("type")?;
        let title = ctx.require_option("title")?;

        let use_sent = folder_kind == "sen";
        let folder = if use_sent {
            &account.sent_emails
        } else {
            &account.inboxed_emails
        };

        let kept: Vec<Email> = folder
            .iter()
            .filter(|email| email.title != title)
            .cloned()
            .collect();

        let update = if use_sent {
            AccountUpdate::SetSent(kept)
        } else {
            AccountUpdate::SetInboxed(kept)
        };

        ctx.store
            .update_one(&AccountFilter::ByUserId(ctx.user_id().to_string()), update)
            .await?;

        ctx.ack("The email has been deleted.").await
    }
}

// ---------------------------------------------------------------------------
// DeleteAllCommand
// ---------------------------------------------------------------------------

/// Empties a folder wholesale. Unlike [`DeleteCommand`], the sent folder
/// sentinel here is the full word `"sent"`.
pub struct DeleteAllCommand;

#[async_trait]
impl Command for DeleteAllCommand {
    fn name(&self) -> &str {
        "deleteall"
    }

    fn group(&self) -> CommandGroup {
        CommandGroup::Personal
    }

    fn description(&self) -> &str {
        "Deletes all emails of a type."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![ParamSpec::required(
            "type",
            "The type of emails to delete (inboxed or sent).",
        )]
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), CourierError> {
        let folder_kind = ctx.require_option("type")?;

        let update = if folder_kind == "sent" {
            AccountUpdate::SetSent(Vec::new())
        } else {
            AccountUpdate::SetInboxed(Vec::new())
        };

        ctx.store
            .update_one(&AccountFilter::ByUserId(ctx.user_id().to_string()), update)
            .await?;

        ctx.ack("All emails of that type have been deleted.").await
    }
}

fn join_or_placeholder(lines: Vec<String>) -> String {
    if lines.is_empty() {
        "`...`".to_string()
    } else {
        lines.join("\n")
    }
}
