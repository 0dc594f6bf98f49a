//! The platform seam.
//!
//! The chat platform itself (gateway protocol, slash-command registration,
//! embed rendering) is an external collaborator. This crate defines the
//! narrow surface the dispatch core talks to instead:
//!
//! - [`Invocation`]: an inbound command invocation (name, invoker identity,
//!   named string options).
//! - [`Responder`]: the response lifecycle -- one immediate acknowledgment,
//!   optionally followed by edits carrying text and file attachments.
//! - [`AlertSink`]: operator-facing error reporting, with a webhook-backed
//!   implementation.

pub mod alert;
pub mod invocation;
pub mod reply;
pub mod responder;
pub mod testing;

pub use alert::{AlertSink, NullAlertSink, WebhookAlertSink};
pub use invocation::Invocation;
pub use reply::{Attachment, Reply, ReplyEdit, Visibility};
pub use responder::{GatewayError, Responder};
