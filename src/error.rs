//! Error types for tvrename.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tvrename.
#[derive(Error, Debug)]
pub enum Error {
    // Parse errors
    #[error("Cannot parse extension: {0}")]
    ExtensionParse(String),

    #[error("Cannot parse episode: {0}")]
    EpisodeParse(String),

    #[error("Cannot parse show name: {0}")]
    ShowNameParse(String),

    // Guess errors
    #[error("Cannot guess {0}: no file gave a usable answer")]
    NoConsensus(&'static str),

    // Assembly errors
    #[error("Duplicate episode {0}")]
    DuplicateEpisode(String),

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("File already exists: {0}")]
    FileAlreadyExists(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
