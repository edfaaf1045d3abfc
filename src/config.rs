//! Configuration for Mamo
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default location of the announcements file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "announcements.json";

/// Main configuration for a Mamo instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// JSON file holding the whole collection
    pub data_file: PathBuf,

    /// fsync the temporary file before it replaces `data_file`
    pub sync_on_save: bool,

    /// Write indented JSON instead of a single line
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            sync_on_save: true,
            pretty: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the announcements file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable fsync before the atomic rename
    pub fn sync_on_save(mut self, sync: bool) -> Self {
        self.config.sync_on_save = sync;
        self
    }

    /// Enable or disable indented output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
