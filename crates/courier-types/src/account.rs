//! The account and email data model.
//!
//! One [`Account`] document exists per registered user. Accounts are keyed
//! by the platform identity string (`user_id`, empty when unlinked) and
//! uniquely by `username`. Serde renames keep the serialized field names
//! identical to the historical document schema so existing databases decode
//! unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maximum username length accepted at signup.
pub const MAX_USERNAME_LEN: usize = 25;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum password length accepted at signup.
pub const MAX_PASSWORD_LEN: usize = 32;

/// A single email record, immutable once stored.
///
/// Appended to the sender's sent folder and each eligible recipient's
/// inbox at delivery time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Username of the sending account.
    pub author: String,
    /// Email title, also used as the match key for deletion.
    pub title: String,
    /// Every username the sender addressed, including ineligible ones.
    pub recipients: Vec<String>,
    /// Body text, with `\n` escapes already translated to newlines.
    pub content: String,
    /// Formatted calendar string, e.g. "January 1st, 2022".
    pub date: String,
}

/// Two-factor authentication state.
///
/// Stored but inert: no handler enforces it. Kept so existing documents
/// that carry 2FA state keep decoding, and as a future-extension stub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactor {
    pub active: bool,
    pub question: String,
    pub answer: String,
}

/// A registered user profile with credentials, folders, and relationship
/// lists.
///
/// `contact_list` and `block_list` are sets represented as maps to a
/// boolean sentinel, so a single key can be set or unset as one field-level
/// store operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Platform identity currently linked to this account. Empty string
    /// means unlinked; at most one account holds a given non-empty id.
    #[serde(rename = "UserID")]
    pub user_id: String,

    /// Globally unique, case-sensitive account name.
    #[serde(rename = "Username")]
    pub username: String,

    /// Plaintext credential. Read it only through
    /// [`Account::password_plaintext_insecure`].
    #[serde(rename = "Password")]
    password: String,

    #[serde(rename = "2FA")]
    pub two_factor: TwoFactor,

    /// Formatted calendar string, not a sortable timestamp.
    #[serde(rename = "SignUpDate")]
    pub sign_up_date: String,

    #[serde(rename = "SentEmails")]
    pub sent_emails: Vec<Email>,

    #[serde(rename = "InboxedEmails")]
    pub inboxed_emails: Vec<Email>,

    /// Reserved; no handler reads or writes drafts yet.
    #[serde(rename = "DraftedEmails")]
    pub drafted_emails: Vec<Email>,

    #[serde(rename = "ContactList")]
    pub contact_list: BTreeMap<String, bool>,

    #[serde(rename = "BlockList")]
    pub block_list: BTreeMap<String, bool>,

    /// When true, inbound email is rejected unless the sender is in
    /// `contact_list`.
    #[serde(rename = "ProtectInbox")]
    pub protect_inbox: bool,
}

impl Account {
    /// Create a fresh, unlinked account as signup does: empty folders and
    /// lists, inbox protection on.
    pub fn new(username: impl Into<String>, password: impl Into<String>, sign_up_date: impl Into<String>) -> Self {
        Self {
            user_id: String::new(),
            username: username.into(),
            password: password.into(),
            two_factor: TwoFactor::default(),
            sign_up_date: sign_up_date.into(),
            sent_emails: Vec::new(),
            inboxed_emails: Vec::new(),
            drafted_emails: Vec::new(),
            contact_list: BTreeMap::new(),
            block_list: BTreeMap::new(),
            protect_inbox: true,
        }
    }

    /// Whether this account is currently linked to a platform identity.
    pub fn is_linked(&self) -> bool {
        !self.user_id.is_empty()
    }

    /// Whether `username` is in this account's contact list.
    pub fn is_contact(&self, username: &str) -> bool {
        self.contact_list.contains_key(username)
    }

    /// Whether this account has blocked `username`.
    pub fn has_blocked(&self, username: &str) -> bool {
        self.block_list.contains_key(username)
    }

    /// The stored plaintext password.
    ///
    /// Plaintext credential storage is a known legacy defect, kept for
    /// parity with existing account data. This accessor is the
    /// only sanctioned way to read it, so a hashed-credential variant can
    /// replace the storage without touching handler code.
    pub fn password_plaintext_insecure(&self) -> &str {
        &self.password
    }
}
