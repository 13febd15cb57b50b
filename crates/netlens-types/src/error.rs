//! Error types for netlens.
//!
//! All crates return `NetlensResult<T>` from fallible operations.
//! Dangling references are never errors; they are filtered where they occur.

use thiserror::Error;

/// Unified error type for netlens.
#[derive(Debug, Error)]
pub enum NetlensError {
    /// A neuron carried a layer tag outside the layer table.
    #[error("Unknown layer tag: '{0}'")]
    UnknownLayer(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Feed data is out of its documented range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, NetlensError>`.
pub type NetlensResult<T> = Result<T, NetlensError>;
