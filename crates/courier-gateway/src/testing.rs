//! Test doubles for the gateway seam.
//!
//! Shared by unit tests here and the dispatch tests in the bot crate, so
//! they live in the library rather than under `#[cfg(test)]`.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::alert::AlertSink;
use crate::reply::{Reply, ReplyEdit};
use crate::responder::{GatewayError, Responder};

/// Records every ack and edit for later assertions.
#[derive(Default)]
pub struct RecordingResponder {
    acks: Mutex<Vec<Reply>>,
    edits: Mutex<Vec<ReplyEdit>>,
}

impl RecordingResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acks(&self) -> Vec<Reply> {
        self.acks.lock().unwrap().clone()
    }

    pub fn edits(&self) -> Vec<ReplyEdit> {
        self.edits.lock().unwrap().clone()
    }

    /// The single ack, panicking if zero or several were sent.
    pub fn only_ack(&self) -> Reply {
        let acks = self.acks();
        assert_eq!(acks.len(), 1, "expected exactly one ack, got {}", acks.len());
        acks.into_iter().next().unwrap()
    }

    /// The most recent edit, if any.
    pub fn last_edit(&self) -> Option<ReplyEdit> {
        self.edits().into_iter().last()
    }

    pub fn is_silent(&self) -> bool {
        self.acks().is_empty() && self.edits().is_empty()
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn ack(&self, reply: Reply) -> Result<(), GatewayError> {
        self.acks.lock().unwrap().push(reply);
        Ok(())
    }

    async fn edit(&self, edit: ReplyEdit) -> Result<(), GatewayError> {
        self.edits.lock().unwrap().push(edit);
        Ok(())
    }
}

/// Collects alert reports instead of delivering them.
#[derive(Default)]
pub struct RecordingAlertSink {
    reports: Mutex<Vec<String>>,
}

impl RecordingAlertSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlertSink for RecordingAlertSink {
    async fn report(&self, message: &str) {
        self.reports.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recording_responder_captures_lifecycle() {
        let responder = RecordingResponder::new();
        assert!(responder.is_silent());

        responder.ack(Reply::private("working...")).await.unwrap();
        responder.edit(ReplyEdit::text("done")).await.unwrap();

        assert_eq!(responder.only_ack().text, "working...");
        assert_eq!(responder.last_edit().unwrap().text, "done");
    }
}
