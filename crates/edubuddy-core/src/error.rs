//! Error types for the core agent crate.

use edubuddy_memory::MemoryError;
use thiserror::Error;

/// Errors returned by agent operations.
#[derive(Debug, Error)]
pub enum EduBuddyCoreError {
    /// Memory bank failure.
    #[error("memory error: {0}")]
    Memory(#[from] MemoryError),
}
