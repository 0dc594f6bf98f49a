//! Error types shared across all courier crates.

/// Errors that can occur across the courier runtime.
///
/// Each variant corresponds to a different subsystem: the account store,
/// the platform gateway, inbound invocation decoding, or configuration.
///
/// A missing account document is never an error; the store reports it as
/// an absent result.
#[derive(Debug, thiserror::Error)]
pub enum CourierError {
    #[error("account store error: {0}")]
    StoreError(String),

    #[error("gateway error: {0}")]
    GatewayError(String),

    #[error("invalid invocation: {0}")]
    InvalidInvocation(String),

    #[error("configuration error: {0}")]
    ConfigError(String),
}
