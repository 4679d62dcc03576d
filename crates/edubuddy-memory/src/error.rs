//! Error types for memory bank operations.

use std::path::PathBuf;

/// Errors returned by memory stores.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The backing file exists but does not hold a memory document.
    #[error("corrupt memory store at {}: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
