use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::file_utils::FileManager;
use crate::info::DEFAULT_CREATOR;

/// Application configuration module
/// This module handles the command-line tool configuration: who is
/// recorded as creator of new databases, the languages used when none are
/// given, and whether saving may replace existing files.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Creator recorded in the metadata of new databases
    #[serde(default = "default_creator")]
    pub creator: String,

    /// Languages for new databases when the command line gives none
    #[serde(default)]
    pub default_languages: LanguagesConfig,

    /// Replace existing files when saving
    #[serde(default)]
    pub overwrite: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Language identifiers for new databases
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LanguagesConfig {
    // @field: First-language identifier
    #[serde(default = "default_first_language")]
    pub first: String,

    // @field: Second-language identifier
    #[serde(default = "default_second_language")]
    pub second: String,
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        Self {
            first: default_first_language(),
            second: default_second_language(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_creator() -> String {
    DEFAULT_CREATOR.to_string()
}

fn default_first_language() -> String {
    "EN".to_string()
}

fn default_second_language() -> String {
    "DE".to_string()
}

impl Config {
    /// Load the configuration from a JSON file, falling back to defaults when it is missing
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !FileManager::file_exists(path) {
            warn!("Config file not found at {:?}, using defaults.", path);
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config.validate()
            .context("Configuration validation failed")?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.creator.trim().is_empty() {
            return Err(anyhow!("Creator cannot be empty"));
        }

        if self.default_languages.first == self.default_languages.second {
            return Err(anyhow!(
                "Default languages must differ, both are '{}'",
                self.default_languages.first
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            creator: default_creator(),
            default_languages: LanguagesConfig::default(),
            overwrite: false,
            log_level: LogLevel::default(),
        }
    }
}
