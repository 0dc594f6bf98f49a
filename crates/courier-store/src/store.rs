//! The `AccountStore` trait and its SQLite-backed implementation.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use courier_types::{Account, CourierError};

use crate::filter::AccountFilter;
use crate::update::AccountUpdate;

/// Find-one / update-one / insert-one access to account documents.
///
/// A missing document is `Ok(None)`, never an error; errors are reserved
/// for transport and decode failures. `update_one` applies its mutation to
/// at most one matching document and succeeds silently when none match.
/// No cross-document transaction is offered: handlers that write two
/// documents accept partial failure.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_one(&self, filter: &AccountFilter) -> Result<Option<Account>, CourierError>;

    async fn update_one(
        &self,
        filter: &AccountFilter,
        update: AccountUpdate,
    ) -> Result<(), CourierError>;

    async fn insert_one(&self, account: Account) -> Result<(), CourierError>;
}

/// SQLite-backed document store: one JSON account document per row, with
/// `user_id` and `username` mirrored into indexed columns for lookup.
pub struct SqliteAccountStore {
    conn: Mutex<Connection>,
}

impl SqliteAccountStore {
    /// Open (or create) the account database at the given path.
    ///
    /// Enables WAL mode and creates the `accounts` table and index if they
    /// do not exist.
    pub fn open(path: &Path) -> Result<Self, CourierError> {
        let conn = Connection::open(path)
            .map_err(|e| CourierError::StoreError(format!("failed to open database: {e}")))?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| CourierError::StoreError(format!("failed to set WAL mode: {e}")))?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS accounts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                username TEXT NOT NULL UNIQUE,
                doc TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_accounts_user_id ON accounts(user_id);",
        )
        .map_err(|e| CourierError::StoreError(format!("failed to create schema: {e}")))?;

        info!(path = %path.display(), "account store opened");

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, CourierError> {
        self.conn
            .lock()
            .map_err(|_| CourierError::StoreError("connection mutex poisoned".to_string()))
    }
}

/// Select the first row matching `filter`, returning `(row_id, account)`.
///
/// Credential filters select by username and verify the password against
/// the decoded document, since the password lives only inside the JSON.
fn select_one(
    conn: &Connection,
    filter: &AccountFilter,
) -> Result<Option<(i64, Account)>, CourierError> {
    let (sql, key) = match filter {
        AccountFilter::ByUserId(id) => {
            ("SELECT id, doc FROM accounts WHERE user_id = ?1 LIMIT 1", id)
        }
        AccountFilter::ByUsername(name) => {
            ("SELECT id, doc FROM accounts WHERE username = ?1 LIMIT 1", name)
        }
        AccountFilter::ByCredentials { username, .. } => (
            "SELECT id, doc FROM accounts WHERE username = ?1 LIMIT 1",
            username,
        ),
    };

    let row: Option<(i64, String)> = conn
        .query_row(sql, params![key], |row| Ok((row.get(0)?, row.get(1)?)))
        .optional()
        .map_err(|e| CourierError::StoreError(format!("account lookup failed: {e}")))?;

    let Some((row_id, doc)) = row else {
        return Ok(None);
    };

    let account: Account = serde_json::from_str(&doc)
        .map_err(|e| CourierError::StoreError(format!("corrupt account document: {e}")))?;

    // Post-decode check for the credential variant.
    if !filter.matches(&account) {
        return Ok(None);
    }

    Ok(Some((row_id, account)))
}

fn encode(account: &Account) -> Result<String, CourierError> {
    serde_json::to_string(account)
        .map_err(|e| CourierError::StoreError(format!("failed to encode account: {e}")))
}

#[async_trait]
impl AccountStore for SqliteAccountStore {
    async fn find_one(&self, filter: &AccountFilter) -> Result<Option<Account>, CourierError> {
        let conn = self.lock()?;
        Ok(select_one(&conn, filter)?.map(|(_, account)| account))
    }

    async fn update_one(
        &self,
        filter: &AccountFilter,
        update: AccountUpdate,
    ) -> Result<(), CourierError> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| CourierError::StoreError(format!("failed to begin update: {e}")))?;

        let Some((row_id, mut account)) = select_one(&tx, filter)? else {
            return Ok(());
        };

        update.apply(&mut account);
        let doc = encode(&account)?;

        tx.execute(
            "UPDATE accounts SET user_id = ?1, username = ?2, doc = ?3 WHERE id = ?4",
            params![account.user_id, account.username, doc, row_id],
        )
        .map_err(|e| CourierError::StoreError(format!("account update failed: {e}")))?;

        tx.commit()
            .map_err(|e| CourierError::StoreError(format!("failed to commit update: {e}")))
    }

    async fn insert_one(&self, account: Account) -> Result<(), CourierError> {
        let doc = encode(&account)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO accounts (user_id, username, doc) VALUES (?1, ?2, ?3)",
            params![account.user_id, account.username, doc],
        )
        .map_err(|e| CourierError::StoreError(format!("account insert failed: {e}")))?;
        Ok(())
    }
}
