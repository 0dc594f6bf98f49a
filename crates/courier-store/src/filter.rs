//! Typed account lookup filters.

use courier_types::Account;

/// Selects at most one account document.
///
/// Explicit variants instead of string-keyed query maps, so a bad field
/// name is a compile error rather than a silent miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountFilter {
    /// Match the account linked to this platform identity.
    ByUserId(String),
    /// Match by unique username.
    ByUsername(String),
    /// Match by exact username and password pair (login).
    ByCredentials { username: String, password: String },
}

impl AccountFilter {
    /// Whether `account` satisfies this filter.
    pub fn matches(&self, account: &Account) -> bool {
        match self {
            AccountFilter::ByUserId(id) => account.user_id == *id,
            AccountFilter::ByUsername(name) => account.username == *name,
            AccountFilter::ByCredentials { username, password } => {
                account.username == *username
                    && account.password_plaintext_insecure() == password
            }
        }
    }

    /// The username this filter targets, if it targets one.
    pub fn username(&self) -> Option<&str> {
        match self {
            AccountFilter::ByUserId(_) => None,
            AccountFilter::ByUsername(name) => Some(name),
            AccountFilter::ByCredentials { username, .. } => Some(username),
        }
    }
}

impl std::fmt::Display for AccountFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountFilter::ByUserId(id) => write!(f, "user_id={id}"),
            AccountFilter::ByUsername(name) => write!(f, "username={name}"),
            // Never render the password.
            AccountFilter::ByCredentials { username, .. } => {
                write!(f, "credentials for username={username}")
            }
        }
    }
}
