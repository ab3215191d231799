/*!
 * Error types for the legendcount application.
 *
 * This module contains custom error types for the different parts of the pipeline,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the subtitle corpus from disk
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The directory does not exist or cannot be listed
    #[error("Failed to read directory {path:?}: {source}")]
    DirectoryRead {
        /// Directory that was being listed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A file is missing or cannot be opened
    #[error("Failed to read file {path:?}: {source}")]
    FileRead {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A file was read but is not valid UTF-8
    #[error("File is not valid UTF-8: {path:?}")]
    Encoding {
        /// File with the invalid content
        path: PathBuf,
    },
}

impl CorpusError {
    /// Classify an I/O failure raised while reading `path`
    pub fn from_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::InvalidData {
            Self::Encoding { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    /// Path the failure relates to
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::DirectoryRead { path, .. } => path,
            Self::FileRead { path, .. } => path,
            Self::Encoding { path } => path,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error while reading the corpus
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure while writing the report
    #[error("Output error: {0}")]
    Output(String),
}

// Utility functions for error conversion

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::Output(error.to_string())
    }
}
