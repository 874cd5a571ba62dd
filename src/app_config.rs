use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::CorpusError;

/// Application configuration module
/// This module handles loading, validating and defaulting the settings of a
/// corpus build. Values come from built-in defaults, an optional JSON config
/// file and finally command line flags.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory holding one poem per file
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Destination JSON file
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Filename suffix filter; empty matches every regular file
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Populate romanized and translated fields
    #[serde(default)]
    pub enable_transliteration: bool,

    /// Draw a progress bar while files are processed
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("poems")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("poems_output.json")
}

fn default_file_extension() -> String {
    ".txt".to_string()
}

fn default_show_progress() -> bool {
    true
}

impl Config {
    // @loads: Configuration from a JSON file, missing fields take defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), CorpusError> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(CorpusError::Config("Input directory must not be empty".to_string()));
        }

        if self.output_file.as_os_str().is_empty() {
            return Err(CorpusError::Config("Output file must not be empty".to_string()));
        }

        // An empty extension is valid and selects files without one
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_dir: default_input_dir(),
            output_file: default_output_file(),
            file_extension: default_file_extension(),
            enable_transliteration: false,
            show_progress: default_show_progress(),
            log_level: LogLevel::default(),
        }
    }
}
