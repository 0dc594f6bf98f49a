//! Account store adapter.
//!
//! Abstracts "find one account by filter" and "apply one update to one
//! account" over a document database. No business logic lives here: the
//! command handlers decide what to mutate, the store applies exactly one
//! field-level operation per call.
//!
//! Two implementations:
//!
//! - [`SqliteAccountStore`]: one JSON document per row with indexed
//!   identity columns. Each update is a read-modify-write inside a single
//!   transaction, giving the single-document atomicity handlers assume.
//! - [`MemoryAccountStore`]: in-memory vector for tests.

pub mod filter;
pub mod memory;
pub mod store;
pub mod update;

pub use filter::AccountFilter;
pub use memory::MemoryAccountStore;
pub use store::{AccountStore, SqliteAccountStore};
pub use update::AccountUpdate;
