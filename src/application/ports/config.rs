//! Configuration store port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisted monitor settings
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored settings.
    ///
    /// A missing file yields an empty config (every field `None`).
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Write settings, creating parent directories as needed
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the settings file
    fn path(&self) -> PathBuf;

    /// Check whether the settings file exists
    fn exists(&self) -> bool;

    /// Write the default settings. Fails if the file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
