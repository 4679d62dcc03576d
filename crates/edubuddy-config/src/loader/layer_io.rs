//! Reading individual config layers.

use super::{CONFIG_FILE_NAME, ConfigLayerSource, USER_CONFIG_DIR, schema};
use crate::ConfigError;
use directories::UserDirs;
use log::debug;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Parse and schema-check one layer.
///
/// A missing optional layer yields `None`; a missing required one is a
/// read error.
pub(super) fn read_layer(
    source: ConfigLayerSource,
    path: &Path,
    required: bool,
) -> Result<Option<Value>, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound && !required => {
            debug!("no config layer (source={source:?}, path={})", path.display());
            return Ok(None);
        }
        Err(err) => return Err(ConfigError::ReadFailed(err)),
    };
    let value: Value = json5::from_str(&contents)?;
    schema::validate_layer_schema(&value, &label(source, path))?;
    debug!("read config layer (source={source:?}, path={})", path.display());
    Ok(Some(value))
}

/// Whether two paths name the same file, comparing canonical forms when
/// both exist.
pub(super) fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// `~/.edubuddy/edubuddy.json5`, when a home directory is known.
pub(super) fn default_user_config_path() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| dirs.home_dir().join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
}

fn label(source: ConfigLayerSource, path: &Path) -> String {
    let name = match source {
        ConfigLayerSource::User => "user",
        ConfigLayerSource::Cwd => "cwd",
        ConfigLayerSource::Runtime => "runtime",
    };
    format!("{name}({})", path.display())
}
