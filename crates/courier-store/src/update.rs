//! Typed single-document update operations.

use courier_types::{Account, Email};

/// One field-level mutation of a single account document.
///
/// Each variant corresponds to one set/unset/push operation the handlers
/// issue. Handlers that touch two documents (login migration, email
/// delivery) issue two separate updates and accept partial failure.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountUpdate {
    /// Link or unlink the account (empty string unlinks).
    SetUserId(String),
    /// Toggle inbox protection.
    SetProtectInbox(bool),
    /// Set one contact-list key.
    AddContact(String),
    /// Unset one contact-list key.
    RemoveContact(String),
    /// Set one block-list key.
    AddBlocked(String),
    /// Unset one block-list key.
    RemoveBlocked(String),
    /// Append one email to the inbox folder.
    PushInboxed(Email),
    /// Append one email to the sent folder.
    PushSent(Email),
    /// Replace the inbox folder wholesale (delete/deleteall rebuilds).
    SetInboxed(Vec<Email>),
    /// Replace the sent folder wholesale.
    SetSent(Vec<Email>),
}

impl AccountUpdate {
    /// Apply this mutation to a decoded account.
    ///
    /// Shared by every store implementation so the semantics cannot drift.
    pub fn apply(&self, account: &mut Account) {
        match self {
            AccountUpdate::SetUserId(id) => account.user_id = id.clone(),
            AccountUpdate::SetProtectInbox(on) => account.protect_inbox = *on,
            AccountUpdate::AddContact(name) => {
                account.contact_list.insert(name.clone(), true);
            }
            AccountUpdate::RemoveContact(name) => {
                account.contact_list.remove(name);
            }
            AccountUpdate::AddBlocked(name) => {
                account.block_list.insert(name.clone(), true);
            }
            AccountUpdate::RemoveBlocked(name) => {
                account.block_list.remove(name);
            }
            AccountUpdate::PushInboxed(email) => account.inboxed_emails.push(email.clone()),
            AccountUpdate::PushSent(email) => account.sent_emails.push(email.clone()),
            AccountUpdate::SetInboxed(emails) => account.inboxed_emails = emails.clone(),
            AccountUpdate::SetSent(emails) => account.sent_emails = emails.clone(),
        }
    }
}
