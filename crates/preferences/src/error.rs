//! Errors raised while loading, saving and deriving data from preferences.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the preference core
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// The preferences document is missing, unreadable or malformed
    #[error("Invalid preferences at {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// Writing the preferences document failed
    #[error("Failed to write preferences to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored URL has no `//` scheme separator
    #[error("URL has no scheme separator: {url}")]
    Format { url: String },
}

impl PreferenceError {
    pub(crate) fn config(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        PreferenceError::Config {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PreferenceError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error came from reading the document
    pub fn is_config(&self) -> bool {
        matches!(self, PreferenceError::Config { .. })
    }
}

/// Result type for preference operations
pub type PreferenceResult<T> = Result<T, PreferenceError>;
