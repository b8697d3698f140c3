//! Error types for the eventboard ecosystem.

use thiserror::Error;

/// Errors that can occur in eventboard operations.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Source '{0}' unavailable: {1}")]
    Source(String, String),

    #[error("Spreadsheet request failed with status {0}")]
    SheetStatus(u16),

    #[error("All event sources failed: {0}")]
    AllSourcesFailed(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for eventboard operations.
pub type BoardResult<T> = Result<T, BoardError>;
