pub mod file;
pub mod resolve;

pub use file::{CatalogSection, Config, RenderSection};
pub use resolve::{load_config, resolve_config};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config at {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown fingerprint mode: {0} (expected \"hashed\" or \"exact\")")]
    UnknownFingerprintMode(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
