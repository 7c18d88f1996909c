//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use crate::constants::corpus;
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Path of the compiled JSON document
    pub bible_path: Option<PathBuf>,
    /// Version label written into converted documents
    pub bible_version: String,
    /// Directory holding raw `.txt` corpus files
    pub source_dir: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            bible_path: default_bible_path(),
            bible_version: corpus::DEFAULT_BIBLE_VERSION.to_string(),
            source_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(path) = env::var("BIBLE_PATH") {
            config.bible_path = Some(expand_path(&path));
        }

        if let Ok(version) = env::var("BIBLE_VERSION") {
            let version = version.trim();
            if !version.is_empty() {
                config.bible_version = version.to_string();
            }
        }

        config.source_dir = env::var("BIBLE_SOURCE_DIR")
            .ok()
            .map(|path| expand_path(&path));

        Ok(config)
    }

    /// Resolve the document path, preferring an explicit override.
    pub fn resolve_bible_path(&self, cli_override: Option<PathBuf>) -> Result<PathBuf> {
        cli_override
            .or_else(|| self.bible_path.clone())
            .ok_or_else(|| {
                Error::config(
                    "No Bible document path configured",
                    "Set BIBLE_PATH or pass --bible <PATH>",
                )
            })
    }

    /// Resolve the corpus source directory, preferring an explicit override.
    pub fn resolve_source_dir(&self, cli_override: Option<PathBuf>) -> Result<PathBuf> {
        cli_override
            .or_else(|| self.source_dir.clone())
            .ok_or_else(|| {
                Error::config(
                    "No corpus source directory configured",
                    "Set BIBLE_SOURCE_DIR or pass the input directory",
                )
            })
    }
}

/// Default document location: `<data dir>/versefind/bible.json`
fn default_bible_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(corpus::APP_DIR).join(corpus::DOCUMENT_FILE_NAME))
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}
