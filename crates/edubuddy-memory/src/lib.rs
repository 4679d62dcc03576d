//! Persistent memory bank for EduBuddy users.
//!
//! The bank is one JSON document mapping user ids to their committed
//! sessions and long-term facts. It is loaded whole and rewritten whole on
//! every mutation.

pub mod error;
pub mod model;
pub mod store;

/// Memory error type.
pub use error::MemoryError;
/// Persisted document model.
pub use model::{MemoryDocument, SessionRecord, UserRecord};
/// Store interface and the JSON file implementation.
pub use store::{JsonFileMemoryStore, MemoryStore};
