//! Common error types for PersonaX

use thiserror::Error;

/// Common result type for PersonaX operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across PersonaX crates
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid user input: wrong answer count or unrecognized answer value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Catalog loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
