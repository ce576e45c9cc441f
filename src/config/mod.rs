//! Configuration management for the galsync crawler
//!
//! This module handles loading and validating configuration from
//! environment variables and TOML files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Crawler configuration
    pub crawler: CrawlerConfig,

    /// Storage configuration
    pub storage: StorageConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Crawler-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// User agent string
    pub user_agent: String,

    /// Enable cookie persistence (session state)
    pub enable_cookies: bool,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the already-archived works
    pub archive_dir: PathBuf,

    /// Path of the author registry store file
    pub registry_path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let request_timeout_secs = std::env::var("GALSYNC_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let user_agent = std::env::var("GALSYNC_USER_AGENT")
            .unwrap_or_else(|_| format!("galsync/{}", env!("CARGO_PKG_VERSION")));

        let archive_dir = std::env::var("GALSYNC_ARCHIVE_DIR")
            .unwrap_or_else(|_| String::from("archive"))
            .into();

        let registry_path = std::env::var("GALSYNC_REGISTRY_PATH")
            .unwrap_or_else(|_| String::from("data/authors.txt"))
            .into();

        let level = std::env::var("GALSYNC_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));
        let format = std::env::var("GALSYNC_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Self {
            crawler: CrawlerConfig {
                request_timeout_secs,
                user_agent,
                enable_cookies: true,
            },
            storage: StorageConfig {
                archive_dir,
                registry_path,
            },
            logging: LoggingConfig { level, format },
        }
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if self.crawler.request_timeout_secs == 0 {
            return Err(Error::config("request_timeout_secs must be greater than 0"));
        }
        if self.crawler.user_agent.is_empty() {
            return Err(Error::config("user_agent must not be empty"));
        }
        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.crawler.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig {
                request_timeout_secs: 30,
                user_agent: format!("galsync/{}", env!("CARGO_PKG_VERSION")),
                enable_cookies: true,
            },
            storage: StorageConfig {
                archive_dir: PathBuf::from("archive"),
                registry_path: PathBuf::from("data/authors.txt"),
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}
