use surf_preferences::PreferenceError;
use thiserror::Error;

/// Errors raised while handling shell intents
#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Preferences error: {0}")]
    Preferences(#[from] PreferenceError),

    #[error("Tab not found: {0}")]
    TabNotFound(usize),

    #[error("Cannot close the last tab")]
    LastTab,

    #[error("History entry not found: {0}")]
    HistoryIndex(usize),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Result type for shell operations
pub type BrowserResult<T> = Result<T, BrowserError>;
