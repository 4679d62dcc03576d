//! Layered configuration loader.
//!
//! Reads up to three kinds of layer, lowest precedence first: the user file
//! (`~/.edubuddy/edubuddy.json5`), `edubuddy.json5` in the working directory,
//! and any runtime override files. Each layer is checked against the schema
//! on its own, then the layers are merged and decoded into `EduBuddyConfig`.

mod layer_io;
mod merge;
mod schema;


use crate::{ConfigError, EduBuddyConfig};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name looked up in the user dir and the working directory.
const CONFIG_FILE_NAME: &str = "edubuddy.json5";
/// Per-user config directory under the home directory.
const USER_CONFIG_DIR: &str = ".edubuddy";

/// Effective config plus the layers it was built from.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// The merged, validated config.
    pub config: EduBuddyConfig,
    /// Layers that were found, in merge order.
    pub layers: Vec<ConfigLayer>,
}

/// Where a config layer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLayerSource {
    /// Per-user file.
    User,
    /// File in the working directory.
    Cwd,
    /// Explicit override file, applied last.
    Runtime,
}

/// A config layer that was read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayer {
    pub source: ConfigLayerSource,
    pub path: PathBuf,
}

/// Which layers to read.
#[derive(Debug, Clone)]
pub struct LayeredConfigOptions {
    /// Directory searched for `edubuddy.json5`.
    pub cwd: PathBuf,
    /// User config file; `None` skips the user layer.
    pub user_config_path: Option<PathBuf>,
    /// Override files, applied in order after every other layer.
    pub runtime_paths: Vec<PathBuf>,
}

impl LayeredConfigOptions {
    /// Default layer locations for `cwd`.
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
            user_config_path: layer_io::default_user_config_path(),
            runtime_paths: Vec::new(),
        }
    }

    /// Override the user config location; `None` skips the user layer.
    pub fn with_user_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.user_config_path = path;
        self
    }

    /// Add a runtime override file. Unlike other layers it must exist.
    pub fn with_runtime_path(mut self, path: impl AsRef<Path>) -> Self {
        self.runtime_paths.push(path.as_ref().to_path_buf());
        self
    }
}

impl EduBuddyConfig {
    /// Load a single config file without layering.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Parse a single JSON5 document without layering.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        decode_effective(value)
    }

    /// Load the user, cwd, and runtime layers from their default locations.
    pub fn load_layered(cwd: impl AsRef<Path>) -> Result<LayeredConfig, ConfigError> {
        Self::load_layered_with_options(LayeredConfigOptions::new(cwd))
    }

    /// Load and merge layers, lowest precedence first: user, cwd, runtime.
    pub fn load_layered_with_options(
        options: LayeredConfigOptions,
    ) -> Result<LayeredConfig, ConfigError> {
        let mut wanted: Vec<(ConfigLayerSource, PathBuf, bool)> = Vec::new();
        if let Some(path) = options.user_config_path {
            wanted.push((ConfigLayerSource::User, path, false));
        }
        wanted.push((ConfigLayerSource::Cwd, options.cwd.join(CONFIG_FILE_NAME), false));
        wanted.extend(
            options
                .runtime_paths
                .into_iter()
                .map(|path| (ConfigLayerSource::Runtime, path, true)),
        );

        let mut merged = Value::Object(serde_json::Map::new());
        let mut layers: Vec<ConfigLayer> = Vec::new();
        for (source, path, required) in wanted {
            if !required && layers.iter().any(|layer| layer_io::same_file(&layer.path, &path)) {
                debug!("config layer already loaded (source={source:?}, path={})", path.display());
                continue;
            }
            let Some(value) = layer_io::read_layer(source, &path, required)? else {
                continue;
            };
            merge::merge_json_values(&mut merged, &value);
            layers.push(ConfigLayer { source, path });
        }

        let config = decode_effective(merged)?;
        info!("layered config loaded (layers={})", layers.len());
        Ok(LayeredConfig { config, layers })
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .generator
            .responses
            .iter()
            .any(|response| response.trim().is_empty())
        {
            return Err(ConfigError::Invalid(
                "generator responses must not be blank".to_string(),
            ));
        }
        if let Some(path) = &self.memory.path
            && path.trim().is_empty()
        {
            return Err(ConfigError::Invalid(
                "memory.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn decode_effective(value: Value) -> Result<EduBuddyConfig, ConfigError> {
    schema::validate_layer_schema(&value, "config")?;
    let config: EduBuddyConfig = serde_json::from_value(value)?;
    config.validate()?;
    Ok(config)
}
