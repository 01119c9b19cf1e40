//! Error types for wikidown

use thiserror::Error;

/// Main error type for wikidown operations
#[derive(Error, Debug)]
pub enum WikidownError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Page library error (bad bundle, unknown page)
    #[error("Library error: {0}")]
    Library(String),

    /// Render error during output generation
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for wikidown operations
pub type Result<T> = std::result::Result<T, WikidownError>;
