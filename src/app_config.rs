use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::frequency::SortOrder;
use crate::report::OutputFormat;
use crate::tokenizer::TokenBoundary;

/// Application configuration module
/// This module handles loading, validating and saving the settings that drive
/// a counting run.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the subtitle archives
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File name suffix selecting the archives
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Whether nested folders are searched too
    #[serde(default)]
    pub recursive: bool,

    /// Order of the final word list
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Report rendering
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Word delimiting rule
    #[serde(default)]
    pub token_boundary: TokenBoundary,

    /// Words seen fewer times are left out of the report
    #[serde(default = "default_min_count")]
    pub min_count: usize,

    /// Maximum number of report rows
    #[serde(default)]
    pub limit: Option<usize>,

    /// Archives read at the same time (0 reads them all at once)
    #[serde(default)]
    pub max_concurrent_reads: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
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

fn default_directory() -> PathBuf {
    PathBuf::from("legends")
}

fn default_extension() -> String {
    ".srt".to_string()
}

fn default_min_count() -> usize {
    1
}

impl Config {
    /// Configuration for counting the archives in `directory` with default settings
    pub fn for_directory<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.directory.as_os_str().is_empty() {
            return Err(anyhow!("Input directory must not be empty"));
        }

        if self.extension.is_empty() {
            return Err(anyhow!("File extension must not be empty"));
        }

        if self.limit == Some(0) {
            return Err(anyhow!("Limit must be greater than zero when set"));
        }

        Ok(())
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Save the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))
    }

    /// Load a configuration file, writing a default one when it does not exist yet
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        log::warn!("Config file not found at {:?}, creating default config.", path);
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            directory: default_directory(),
            extension: default_extension(),
            recursive: false,
            sort_order: SortOrder::default(),
            output_format: OutputFormat::default(),
            token_boundary: TokenBoundary::default(),
            min_count: default_min_count(),
            limit: None,
            max_concurrent_reads: 0,
            log_level: LogLevel::default(),
        }
    }
}
