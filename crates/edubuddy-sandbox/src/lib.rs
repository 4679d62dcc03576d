//! Code execution capability for EduBuddy tools.
//!
//! Code never runs with ambient access to the host. A [`CodeRunner`] decides
//! what a "program" is and what it may touch; the shipped
//! [`ArithmeticRunner`] only understands assignments of arithmetic
//! expressions and has no built-in functions or constants.

pub mod arithmetic;
pub mod error;
pub mod runner;

/// Arithmetic assignment runner.
pub use arithmetic::ArithmeticRunner;
/// Sandbox error type.
pub use error::SandboxError;
/// Runner trait and execution result.
pub use runner::{CodeRunner, ExecutionOutcome};
