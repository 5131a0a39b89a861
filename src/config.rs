//! Configuration
//!
//! Loaded once at startup from an optional `config.toml` with `RFM_*`
//! environment overrides. Everything has a default, so the shell runs
//! with no config file at all.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::osinfo;

/// Where the cursor starts.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartDir {
    /// The invoking user's home directory (the documented default).
    #[default]
    Home,
    /// The process working directory.
    Cwd,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShellConfig {
    /// Starting directory for the cursor.
    #[serde(default)]
    pub start_dir: StartDir,

    /// Chunk size for streaming transfers, in bytes.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_buffer_size() -> usize {
    8192
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            start_dir: StartDir::default(),
            buffer_size: default_buffer_size(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from `config.toml` (if present) with
    /// environment overrides (e.g. `RFM_BUFFER_SIZE=65536`).
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("RFM"))
            .build()?;

        let config: ShellConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::Message(
                "buffer_size must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// The starting cursor path. Falls back to the process working
    /// directory (then the root) when the home directory is unknown.
    pub fn start_path(&self) -> PathBuf {
        let cwd = || env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        match self.start_dir {
            StartDir::Home => osinfo::home_dir().unwrap_or_else(cwd),
            StartDir::Cwd => cwd(),
        }
    }
}
