/*!
 * Error types for the poem-corpus application.
 *
 * Errors are split by how far they travel: directory and output failures end
 * the run, a failed poem file is skipped, and a failed transliteration never
 * leaves the record it belongs to.
 */

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or writing a corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The input path does not exist or is not a directory
    #[error("Input directory not found: {}", .0.display())]
    InputDirNotFound(PathBuf),

    /// The input directory exists but could not be listed
    #[error("Error listing directory contents of {}: {source}", .path.display())]
    DirectoryListing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single poem file could not be opened, decoded or read
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The corpus could not be encoded as JSON
    #[error("Failed to serialize corpus: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The output file could not be created or written
    #[error("Error writing output JSON file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CorpusError {
    /// Whether this error ends the run. Only per-file read errors are recoverable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::FileRead { .. })
    }
}

/// Errors reported by a transliteration backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransliterationError {
    /// The converter left source-script characters in its output
    #[error("Unmapped characters remain after transliteration: {text}")]
    Unmapped { text: String },

    /// Any other backend failure
    #[error("Transliteration failed: {0}")]
    Failed(String),
}
