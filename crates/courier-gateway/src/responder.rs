//! The response lifecycle trait.

use async_trait::async_trait;
use thiserror::Error;

use courier_types::CourierError;

use crate::reply::{Reply, ReplyEdit};

/// Errors from gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("{0}")]
    Other(String),
}

impl From<GatewayError> for CourierError {
    fn from(err: GatewayError) -> Self {
        CourierError::GatewayError(err.to_string())
    }
}

/// Sends responses for one invocation.
///
/// Every handler must `ack` exactly once, immediately; handlers that do
/// store I/O afterwards follow up with `edit` calls against the same
/// response. The platform backend implements this against its REST API.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Send the immediate acknowledgment.
    async fn ack(&self, reply: Reply) -> Result<(), GatewayError>;

    /// Edit the previously acknowledged response.
    async fn edit(&self, edit: ReplyEdit) -> Result<(), GatewayError>;
}
