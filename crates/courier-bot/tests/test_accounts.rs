//! End-to-end account lifecycle through the dispatcher.

mod common;

use anyhow::Result;

use courier_bot::Dispatcher;
use courier_gateway::testing::RecordingResponder;
use courier_gateway::Invocation;

use common::{guild_invocation, memory_dispatcher, COOLDOWN};

async fn dispatch(dispatcher: &Dispatcher, invocation: &Invocation) -> RecordingResponder {
    let responder = RecordingResponder::new();
    dispatcher.dispatch(invocation, &responder).await;
    // Consecutive invocations in one test come from the same user.
    tokio::time::sleep(COOLDOWN + COOLDOWN).await;
    responder
}

fn credentials(command: &str, user_id: &str) -> Invocation {
    guild_invocation(command, user_id)
        .with_option("username", "mika")
        .with_option("password", "hunter2hunter2")
}

async fn sign_up_and_log_in(dispatcher: &Dispatcher, user_id: &str) {
    dispatch(dispatcher, &credentials("signup", user_id)).await;
    dispatch(dispatcher, &credentials("login", user_id)).await;
}

#[tokio::test(start_paused = true)]
async fn signup_creates_an_unlinked_account() -> Result<()> {
    let (dispatcher, store, _alerts) = memory_dispatcher();

    let responder = dispatch(&dispatcher, &credentials("signup", "id-1")).await;
    assert_eq!(
        responder.only_ack().text,
        "You've signed up as `@mika`, congrats! Now, run `/login`."
    );

    let account = store.get("mika").unwrap();
    assert!(account.user_id.is_empty());
    assert!(account.protect_inbox);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn login_links_the_account_to_the_invoker() -> Result<()> {
    let (dispatcher, store, _alerts) = memory_dispatcher();
    dispatch(&dispatcher, &credentials("signup", "id-1")).await;

    let responder = dispatch(&dispatcher, &credentials("login", "id-1")).await;
    assert_eq!(
        responder.only_ack().text,
        "Logging you out of any previous account..."
    );
    assert_eq!(
        responder.last_edit().unwrap().text,
        "You are now logged into `@mika`!"
    );

    assert_eq!(store.get("mika").unwrap().user_id, "id-1");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn login_migrates_the_identity_between_accounts() -> Result<()> {
    let (dispatcher, store, _alerts) = memory_dispatcher();
    sign_up_and_log_in(&dispatcher, "id-1").await;

    let other = guild_invocation("signup", "id-1")
        .with_option("username", "rin")
        .with_option("password", "hunter2hunter2");
    let responder = dispatch(&dispatcher, &other).await;
    assert_eq!(responder.only_ack().text, "You've already signed up!");

    // A different identity signs up the second account and logs in,
    // then the first identity takes it over.
    let other = guild_invocation("signup", "id-2")
        .with_option("username", "rin")
        .with_option("password", "hunter2hunter2");
    dispatch(&dispatcher, &other).await;

    let takeover = guild_invocation("login", "id-1")
        .with_option("username", "rin")
        .with_option("password", "hunter2hunter2");
    dispatch(&dispatcher, &takeover).await;

    assert_eq!(store.get("mika").unwrap().user_id, "");
    assert_eq!(store.get("rin").unwrap().user_id, "id-1");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn login_with_bad_credentials_is_refused() -> Result<()> {
    let (dispatcher, _store, _alerts) = memory_dispatcher();
    dispatch(&dispatcher, &credentials("signup", "id-1")).await;

    let invocation = guild_invocation("login", "id-1")
        .with_option("username", "mika")
        .with_option("password", "wrong-password-42");
    let responder = dispatch(&dispatcher, &invocation).await;

    assert_eq!(
        responder.only_ack().text,
        "Those credentials don't match any account!"
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn account_info_reflects_the_linked_account() -> Result<()> {
    let (dispatcher, _store, _alerts) = memory_dispatcher();
    sign_up_and_log_in(&dispatcher, "id-1").await;

    let responder = dispatch(&dispatcher, &guild_invocation("account", "id-1")).await;

    let text = responder.only_ack().text;
    assert!(text.starts_with("This account's info."));
    assert!(text.contains("Username: `@mika`"));
    assert!(text.contains("Password: `hunter2hunter2`"));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn protection_toggle_round_trips_through_settings() -> Result<()> {
    let (dispatcher, store, _alerts) = memory_dispatcher();
    sign_up_and_log_in(&dispatcher, "id-1").await;

    let invocation = guild_invocation("protection", "id-1").with_option("status", "off");
    let responder = dispatch(&dispatcher, &invocation).await;
    assert_eq!(responder.only_ack().text, "Inbox protection toggled `off`.");
    assert!(!store.get("mika").unwrap().protect_inbox);

    let responder = dispatch(&dispatcher, &guild_invocation("settings", "id-1")).await;
    assert!(responder.only_ack().text.contains("Inbox Protection: `false`"));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn duplicate_username_is_refused_at_signup() -> Result<()> {
    let (dispatcher, store, _alerts) = memory_dispatcher();
    dispatch(&dispatcher, &credentials("signup", "id-1")).await;

    let responder = dispatch(&dispatcher, &credentials("signup", "id-2")).await;
    assert_eq!(
        responder.only_ack().text,
        "That username is already under an account!"
    );

    assert!(store.get("mika").is_some());
    Ok(())
}
