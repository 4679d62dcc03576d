//! Configuration schema for EduBuddy.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Memory bank location used when none is configured, relative to the cwd.
pub const DEFAULT_MEMORY_PATH: &str = ".edubuddy/memory_bank.json";

/// Root config for EduBuddy.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EduBuddyConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
}

impl EduBuddyConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> EduBuddyConfigBuilder {
        EduBuddyConfigBuilder::new()
    }

    /// Memory bank path, resolving relative paths against `cwd`.
    pub fn memory_path(&self, cwd: impl AsRef<Path>) -> PathBuf {
        let path = self
            .memory
            .path
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MEMORY_PATH));
        if path.is_absolute() {
            path
        } else {
            cwd.as_ref().join(path)
        }
    }
}

/// Builder for assembling an `EduBuddyConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct EduBuddyConfigBuilder {
    config: EduBuddyConfig,
}

impl EduBuddyConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: EduBuddyConfig::default(),
        }
    }

    /// Replace the memory bank configuration.
    pub fn memory(mut self, memory: MemoryConfig) -> Self {
        self.config.memory = memory;
        self
    }

    /// Replace the response generator configuration.
    pub fn generator(mut self, generator: GeneratorConfig) -> Self {
        self.config.generator = generator;
        self
    }

    /// Replace the tool defaults.
    pub fn tools(mut self, tools: ToolsConfig) -> Self {
        self.config.tools = tools;
        self
    }

    /// Finalize and return the built `EduBuddyConfig`.
    pub fn build(self) -> EduBuddyConfig {
        self.config
    }
}

/// Memory bank configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MemoryConfig {
    /// Path of the JSON memory bank file.
    #[serde(default)]
    pub path: Option<String>,
}

/// Canned response generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GeneratorConfig {
    /// Fixed RNG seed; entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Replacement canned responses; the built-in set is used when empty.
    #[serde(default)]
    pub responses: Vec<String>,
}

/// Tool settings used by the agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolsConfig {
    /// Hits returned by each web search.
    #[serde(default = "default_search_top_k")]
    pub search_top_k: usize,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            search_top_k: default_search_top_k(),
        }
    }
}

fn default_search_top_k() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MEMORY_PATH, EduBuddyConfig, MemoryConfig, ToolsConfig};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn memory_path_defaults_under_cwd() {
        let config = EduBuddyConfig::default();
        assert_eq!(
            config.memory_path("/work"),
            PathBuf::from("/work").join(DEFAULT_MEMORY_PATH)
        );
    }

    #[test]
    fn memory_path_keeps_absolute_paths() {
        let config = EduBuddyConfig::builder()
            .memory(MemoryConfig {
                path: Some("/data/bank.json".to_string()),
            })
            .build();
        assert_eq!(config.memory_path("/work"), PathBuf::from("/data/bank.json"));
    }

    #[test]
    fn search_defaults_to_three_hits() {
        assert_eq!(ToolsConfig::default(), ToolsConfig { search_top_k: 3 });
    }
}
