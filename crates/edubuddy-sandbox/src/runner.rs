//! Runner trait and the structured execution result.

use crate::SandboxError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Debug;

/// Structured result of a code execution request.
///
/// Serializes as `{"success": true, "output": {...}}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    /// Whether the code ran to completion.
    pub success: bool,
    /// Bindings produced by the code, on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Map<String, Value>>,
    /// Error message, on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionOutcome {
    /// Successful execution with the resulting bindings.
    pub fn succeeded(output: Map<String, Value>) -> Self {
        Self {
            success: true,
            output: Some(output),
            error: None,
        }
    }

    /// Failed execution with a message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.into()),
        }
    }
}

/// Executes code fragments inside an explicit capability boundary.
pub trait CodeRunner: Send + Sync + Debug {
    /// Runner name used in logs.
    fn name(&self) -> &str;

    /// Run `code`, returning the bindings it produced.
    fn run(&self, code: &str) -> Result<Map<String, Value>, SandboxError>;

    /// Run `code`, folding any failure into the outcome instead of an error.
    fn execute(&self, code: &str) -> ExecutionOutcome {
        debug!("executing code (runner={}, code_len={})", self.name(), code.len());
        match self.run(code) {
            Ok(output) => ExecutionOutcome::succeeded(output),
            Err(err) => {
                info!("code execution failed (runner={}, error={})", self.name(), err);
                ExecutionOutcome::failed(err.to_string())
            }
        }
    }
}
