//! Code execution through a sandbox runner.

use edubuddy_sandbox::{ArithmeticRunner, CodeRunner, ExecutionOutcome};
use log::info;

/// Run `code` with the default arithmetic runner.
///
/// Failures come back as `success: false` outcomes; this never errors.
pub fn code_execute(code: &str) -> ExecutionOutcome {
    code_execute_with(&ArithmeticRunner::new(), code)
}

/// Run `code` with an explicit runner, folding its errors into the outcome.
pub fn code_execute_with(runner: &dyn CodeRunner, code: &str) -> ExecutionOutcome {
    info!(
        "Tool:code_execute called (runner={}, code_len={})",
        runner.name(),
        code.len()
    );
    runner.execute(code)
}
