use std::io;

/// Errors that can occur during react-runner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Debug session error: {0}")]
    DebugSessionError(String),
}

/// Result type alias for react-runner operations
pub type Result<T> = std::result::Result<T, Error>;
