//! Configuration management for output and parsing preferences.
//!
//! Stores configuration in JSON format at `~/.spiralsolve/config.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{Error, Result};
use crate::protocol::ParseOptions;

/// How batch results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One heading token per line.
    #[default]
    Text,
    /// JSON array of answers.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("Unknown output format: {}", other))),
        }
    }
}

/// Configuration data stored in JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format for batch results.
    #[serde(default, rename = "outputFormat")]
    pub output_format: OutputFormat,

    /// Reject tokens after the last declared case.
    #[serde(default)]
    pub strict: bool,

    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level", rename = "logLevel")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            strict: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse options implied by this configuration.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict: self.strict,
        }
    }
}

/// Configuration store for managing settings.
///
/// Handles reading and writing configuration to `~/.spiralsolve/config.json`.
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a new config store with the default path.
    ///
    /// Default path: `~/.spiralsolve/config.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        let config_path = home.join(".spiralsolve").join("config.json");

        Ok(Self { config_path })
    }

    /// Create a config store with a custom path.
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Path of the configuration file.
    pub fn path(&self) -> &std::path::Path {
        &self.config_path
    }

    /// Load configuration from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub async fn load(&self) -> Result<Config> {
        let exists = fs::try_exists(&self.config_path).await.map_err(|e| {
            Error::Config(format!(
                "Cannot check {}: {}",
                self.config_path.display(),
                e
            ))
        })?;
        if !exists {
            debug!(path = %self.config_path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to disk, creating parent directories as needed.
    pub async fn save(&self, config: &Config) -> Result<()> {
        let content = serde_json::to_string_pretty(config)?;
        replace_file(&self.config_path, content.as_bytes()).await?;
        debug!(path = %self.config_path.display(), "Saved config");
        Ok(())
    }

    /// Set the default output format.
    pub async fn set_output_format(&self, format: OutputFormat) -> Result<()> {
        let mut config = self.load().await?;
        config.output_format = format;
        self.save(&config).await
    }

    /// Enable or disable strict parsing.
    pub async fn set_strict(&self, strict: bool) -> Result<()> {
        let mut config = self.load().await?;
        config.strict = strict;
        self.save(&config).await
    }

    /// Set the default log filter.
    pub async fn set_log_level(&self, level: &str) -> Result<()> {
        let level = level.trim();
        if level.is_empty() {
            return Err(Error::Config("Log level must not be empty".to_string()));
        }
        let mut config = self.load().await?;
        config.log_level = level.to_string();
        self.save(&config).await
    }

    /// Overwrite the stored configuration with defaults.
    pub async fn reset(&self) -> Result<Config> {
        let config = Config::default();
        self.save(&config).await?;
        Ok(config)
    }
}

/// Replace `path` with `contents` so readers never observe a half-written file.
///
/// The bytes go to a `.partial` sibling first, are flushed to disk, and then
/// renamed over the target.
async fn replace_file(path: &Path, contents: &[u8]) -> Result<()> {
    let staged = path.with_extension("partial");
    let fail = |what: &str, e: std::io::Error| {
        Error::Config(format!("Cannot {} {}: {}", what, path.display(), e))
    };

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| fail("create the directory for", e))?;
    }

    let mut file = fs::File::create(&staged)
        .await
        .map_err(|e| fail("stage", e))?;
    file.write_all(contents)
        .await
        .map_err(|e| fail("write", e))?;
    file.sync_all().await.map_err(|e| fail("flush", e))?;
    drop(file);

    fs::rename(&staged, path)
        .await
        .map_err(|e| fail("replace", e))
}
