//! Env file parsing.

use std::collections::HashMap;
use std::path::Path;

use super::{ConfigError, ConfigResult};

/// Read `KEY=value` pairs from an env file without touching the process
/// environment.
pub fn read_env_file(path: &Path) -> ConfigResult<HashMap<String, String>> {
    let env_file_error = |message: String| ConfigError::EnvFile {
        path: path.to_path_buf(),
        message,
    };

    dotenvy::from_path_iter(path)
        .map_err(|e| env_file_error(e.to_string()))?
        .map(|item| item.map_err(|e| env_file_error(e.to_string())))
        .collect()
}
