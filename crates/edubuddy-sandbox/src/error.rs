//! Sandbox error types.

/// Errors returned by code runners.
#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    /// A statement is not of the form `name = expression`.
    #[error("invalid statement `{statement}`: {reason}")]
    InvalidStatement { statement: String, reason: String },
    /// An expression failed to parse or evaluate.
    #[error("evaluation failed in `{statement}`: {message}")]
    Evaluation { statement: String, message: String },
    /// An expression produced infinity or NaN, e.g. a division by zero.
    #[error("arithmetic error in `{statement}`: result is not finite")]
    NonFinite { statement: String },
    /// Runner-specific execution failure.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}
