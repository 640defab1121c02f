// Configuration module

mod models;

pub use models::*;

use crate::error::{ApiError, Result};
use config::{Config, Environment, File, FileFormat, FileSourceFile};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `MESSAGES_API__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "MESSAGES_API";

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    ///
    /// CLI flags are applied on top by the caller. When `path` is given the
    /// file must exist; otherwise `~/.messages-api/config.toml` is read if
    /// present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ApiError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                File::from(path).format(FileFormat::Toml).required(true)
            }
            None => File::from(Self::default_config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        Self::build(file, Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    fn build(file: File<FileSourceFile, FileFormat>, env: Environment) -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(env)
            .build()?;

        Ok(config.try_deserialize()?)
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".messages-api")
            .join("config.toml")
    }
}
