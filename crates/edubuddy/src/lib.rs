//! Public surface for EduBuddy.
//!
//! This crate re-exports the building blocks, wires them together for the
//! scripted study-help demo, and provides a logging helper for binaries.

/// Re-export for convenience.
pub use edubuddy_config as config;
pub use edubuddy_core as core;
/// Re-export for convenience.
pub use edubuddy_memory as memory;
/// Re-export for convenience.
pub use edubuddy_protocol as protocol;
pub use edubuddy_tools as tools;

pub mod demo;

use edubuddy_config::{EduBuddyConfig, GeneratorConfig};
use edubuddy_tools::CannedResponseGenerator;
use log::debug;
use std::path::{Path, PathBuf};

/// Environment variable overriding the memory bank location.
pub const MEMORY_PATH_ENV: &str = "EDUBUDDY_MEMORY_PATH";

/// Initialize logging with millisecond timestamps, defaulting to `info`.
///
/// `RUST_LOG` takes precedence over the default filter. Repeated calls are
/// ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

/// Resolve the memory bank path: explicit override, then config, then default.
///
/// Relative paths are resolved against `cwd`.
pub fn resolve_memory_path(
    config: &EduBuddyConfig,
    cwd: impl AsRef<Path>,
    env_override: Option<String>,
) -> PathBuf {
    let cwd = cwd.as_ref();
    match env_override.filter(|value| !value.trim().is_empty()) {
        Some(value) => {
            debug!("memory path taken from {MEMORY_PATH_ENV} (path={value})");
            let path = PathBuf::from(value);
            if path.is_absolute() {
                path
            } else {
                cwd.join(path)
            }
        }
        None => config.memory_path(cwd),
    }
}

/// Build the canned response generator described by `config`.
pub fn build_generator(config: &GeneratorConfig) -> CannedResponseGenerator {
    let generator = CannedResponseGenerator::from_seed_option(config.seed);
    if config.responses.is_empty() {
        generator
    } else {
        generator.with_responses(config.responses.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{build_generator, resolve_memory_path};
    use edubuddy_config::{
        DEFAULT_MEMORY_PATH, EduBuddyConfig, GeneratorConfig, MemoryConfig,
    };
    use edubuddy_tools::{ResponseGenerator, STUB_MARKER};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn memory_path_prefers_env_then_config_then_default() {
        let configured = EduBuddyConfig::builder()
            .memory(MemoryConfig {
                path: Some("configured.json".to_string()),
            })
            .build();
        let cwd = PathBuf::from("/work");

        assert_eq!(
            resolve_memory_path(&configured, &cwd, Some("/tmp/env.json".to_string())),
            PathBuf::from("/tmp/env.json")
        );
        assert_eq!(
            resolve_memory_path(&configured, &cwd, None),
            cwd.join("configured.json")
        );
        assert_eq!(
            resolve_memory_path(&EduBuddyConfig::default(), &cwd, Some("  ".to_string())),
            cwd.join(DEFAULT_MEMORY_PATH)
        );
    }

    #[test]
    fn generator_uses_configured_responses() {
        let generator = build_generator(&GeneratorConfig {
            seed: Some(5),
            responses: vec!["Configured.".to_string()],
        });
        assert_eq!(generator.generate("x"), format!("Configured.{STUB_MARKER}"));
    }
}
