//! Outbound reply types.

/// Who can see a response.
///
/// Declared per command, never recomputed per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Visible only to the invoking user (ephemeral).
    Private,
    /// Visible to the channel.
    Broadcast,
}

/// The immediate acknowledgment for an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub visibility: Visibility,
}

impl Reply {
    pub fn private(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visibility: Visibility::Private,
        }
    }

    pub fn broadcast(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visibility: Visibility::Broadcast,
        }
    }
}

/// A downloadable text artifact attached to a reply edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Filename for the upload (e.g., "Hello World.txt").
    pub filename: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn text_file(filename: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            bytes: body.into().into_bytes(),
        }
    }
}

/// A follow-up edit to the acknowledgment, used by handlers that perform
/// store I/O after acking to stay within interactive response limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyEdit {
    pub text: String,
    pub attachments: Vec<Attachment>,
}

impl ReplyEdit {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    pub fn with_attachments(text: impl Into<String>, attachments: Vec<Attachment>) -> Self {
        Self {
            text: text.into(),
            attachments,
        }
    }
}
