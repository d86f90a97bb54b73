//! Error types for loading configuration and records.
//!
//! Rendering itself never fails; only reading inputs from disk does.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a configuration or record document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error when reading the document.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed document with location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}
