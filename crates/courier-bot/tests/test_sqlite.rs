//! End-to-end dispatch against the SQLite-backed store.
//!
//! The other integration tests use the in-memory store; this one wires
//! the real persistence layer through the dispatcher to verify the whole
//! stack against an actual database file.

mod common;

use std::sync::Arc;

use anyhow::Result;
use tempfile::NamedTempFile;

use courier_gateway::testing::RecordingResponder;
use courier_store::{AccountFilter, AccountStore, SqliteAccountStore};

use common::{dispatcher_over, guild_invocation, COOLDOWN};

#[tokio::test(start_paused = true)]
async fn signup_login_and_send_survive_the_database() -> Result<()> {
    let tmp = NamedTempFile::new()?;
    let (dispatcher, alerts) = dispatcher_over(Arc::new(SqliteAccountStore::open(tmp.path())?));

    for (user_id, username) in [("id-1", "mika"), ("id-2", "rin")] {
        let invocation = guild_invocation("signup", user_id)
            .with_option("username", username)
            .with_option("password", "hunter2hunter2");
        dispatcher.dispatch(&invocation, &RecordingResponder::new()).await;
        tokio::time::sleep(COOLDOWN + COOLDOWN).await;

        let invocation = guild_invocation("login", user_id)
            .with_option("username", username)
            .with_option("password", "hunter2hunter2");
        dispatcher.dispatch(&invocation, &RecordingResponder::new()).await;
        tokio::time::sleep(COOLDOWN + COOLDOWN).await;
    }

    let invocation = guild_invocation("addcontact", "id-2").with_option("username", "mika");
    dispatcher.dispatch(&invocation, &RecordingResponder::new()).await;
    tokio::time::sleep(COOLDOWN + COOLDOWN).await;

    let invocation = guild_invocation("email", "id-1")
        .with_option("usernames", "rin")
        .with_option("title", "Hi")
        .with_option("content", "hello there");
    let responder = RecordingResponder::new();
    dispatcher.dispatch(&invocation, &responder).await;
    assert_eq!(responder.last_edit().unwrap().text, "`1` emails were sent, nice!");
    assert!(alerts.reports().is_empty());

    // Reopen the database to confirm the documents were persisted.
    drop(dispatcher);
    let reopened = SqliteAccountStore::open(tmp.path())?;
    let rin = reopened
        .find_one(&AccountFilter::ByUsername("rin".into()))
        .await?
        .unwrap();
    assert_eq!(rin.user_id, "id-2");
    assert_eq!(rin.inboxed_emails.len(), 1);
    assert_eq!(rin.inboxed_emails[0].title, "Hi");

    let mika = reopened
        .find_one(&AccountFilter::ByUserId("id-1".into()))
        .await?
        .unwrap();
    assert_eq!(mika.sent_emails.len(), 1);
    Ok(())
}
