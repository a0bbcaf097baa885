//! Error types for vendorclean
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vendorclean operations
pub type VendorCleanResult<T> = Result<T, VendorCleanError>;

/// A single entry the executor could not remove
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalFailure {
    /// Path relative to the vendor root
    pub path: PathBuf,
    /// Human readable cause
    pub message: String,
}

impl RemovalFailure {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RemovalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Main error type for vendorclean operations
#[derive(Error, Debug)]
pub enum VendorCleanError {
    /// The vendor directory does not exist
    #[error("vendor directory not found: {path}")]
    VendorDirNotFound { path: PathBuf },

    /// The vendor path exists but is not a directory
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// The lock manifest does not exist
    #[error("lock manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// The lock manifest could not be parsed
    #[error("invalid lock manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Reading the vendor tree failed while planning
    #[error("failed to read {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Some planned entries could not be removed
    #[error("{} of {} entries could not be removed", failures.len(), failures.len() + removed.len())]
    PartialCleanup {
        failures: Vec<RemovalFailure>,
        removed: Vec<PathBuf>,
    },

    /// Invalid configuration file or value
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Invalid keep pattern
    #[error("invalid keep pattern '{pattern}': {message}")]
    KeepPattern { pattern: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
