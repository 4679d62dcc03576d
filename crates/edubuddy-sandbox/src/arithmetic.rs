//! In-process runner for arithmetic assignment programs.
//!
//! A program is a list of `name = expression` statements separated by
//! newlines or `;`. Blank lines and lines starting with `#` are skipped.
//! Expressions see only numbers, operators, and names bound by earlier
//! statements.

use crate::{CodeRunner, SandboxError};
use log::debug;
use meval::{Context, Expr};
use serde_json::{Map, Value};

/// Runner evaluating arithmetic assignments with an empty context.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArithmeticRunner;

impl ArithmeticRunner {
    /// Create a new arithmetic runner.
    pub fn new() -> Self {
        Self
    }
}

impl CodeRunner for ArithmeticRunner {
    fn name(&self) -> &str {
        "arithmetic"
    }

    fn run(&self, code: &str) -> Result<Map<String, Value>, SandboxError> {
        let mut bindings: Vec<(String, f64)> = Vec::new();
        for statement in statements(code) {
            let (name, source) = parse_assignment(statement)?;
            let expr = source
                .parse::<Expr>()
                .map_err(|err| SandboxError::Evaluation {
                    statement: statement.to_string(),
                    message: err.to_string(),
                })?;

            let mut ctx = Context::empty();
            for (bound, value) in &bindings {
                ctx.var(bound.clone(), *value);
            }
            let value = expr
                .eval_with_context(&ctx)
                .map_err(|err| SandboxError::Evaluation {
                    statement: statement.to_string(),
                    message: err.to_string(),
                })?;
            if !value.is_finite() {
                return Err(SandboxError::NonFinite {
                    statement: statement.to_string(),
                });
            }

            match bindings.iter_mut().find(|(bound, _)| bound == name) {
                Some(slot) => slot.1 = value,
                None => bindings.push((name.to_string(), value)),
            }
        }
        debug!("arithmetic program finished (bindings={})", bindings.len());

        Ok(bindings
            .into_iter()
            .map(|(name, value)| (name, number_value(value)))
            .collect())
    }
}

/// Split a program into trimmed, non-empty, non-comment statements.
fn statements(code: &str) -> impl Iterator<Item = &str> {
    code.split(['\n', ';'])
        .map(str::trim)
        .filter(|statement| !statement.is_empty() && !statement.starts_with('#'))
}

/// Split `name = expression` into its parts.
fn parse_assignment(statement: &str) -> Result<(&str, &str), SandboxError> {
    let invalid = |reason: &str| SandboxError::InvalidStatement {
        statement: statement.to_string(),
        reason: reason.to_string(),
    };
    let Some((name, source)) = statement.split_once('=') else {
        return Err(invalid("expected `name = expression`"));
    };
    let name = name.trim();
    let source = source.trim();
    if !is_identifier(name) {
        return Err(invalid("left-hand side must be a name"));
    }
    if source.is_empty() || source.starts_with('=') {
        return Err(invalid("missing expression"));
    }
    Ok((name, source))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whole numbers render as integers so `x = 2 * 3` reads back as `6`.
fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}
