//! Core types shared across all courier crates.
//!
//! Defines the account/email data model, the shared error type, and runtime
//! configuration used by the store, gateway, and bot crates.

pub mod account;
pub mod config;
pub mod error;

pub use account::{Account, Email, TwoFactor, MAX_PASSWORD_LEN, MAX_USERNAME_LEN, MIN_PASSWORD_LEN};
pub use config::BotConfig;
pub use error::CourierError;
