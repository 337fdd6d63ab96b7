use std::env;
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigError};

pub const CONFIG_FILE_NAME: &str = ".coursegraph.toml";

/// Locates the config file to use: explicit flag first, then the
/// COURSEGRAPH_CONFIG environment variable, then an ancestor walk from the
/// current directory. Returns `None` when no config exists anywhere, which
/// is not an error (defaults apply).
pub fn resolve_config(override_path: Option<PathBuf>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = override_path {
        if !path.is_file() {
            return Err(ConfigError::ConfigNotFound(path));
        }
        return Ok(Some(path));
    }

    if let Ok(path) = env::var("COURSEGRAPH_CONFIG") {
        let path = PathBuf::from(path);
        if !path.is_file() {
            return Err(ConfigError::ConfigNotFound(path));
        }
        return Ok(Some(path));
    }

    let start = env::current_dir()?;
    Ok(find_config_from(&start))
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

fn find_config_from(start: &Path) -> Option<PathBuf> {
    for ancestor in start.ancestors() {
        let candidate = ancestor.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}
