//! Error types for ppinet.

use thiserror::Error;

/// Top-level error type for PPI network operations.
///
/// Absence of an entity (unknown protein id, unreachable destination) is
/// never an error: those are modeled as absent results on the operations
/// themselves. This enum covers the faults the loader and configuration
/// layer can actually hit.
#[derive(Debug, Error)]
pub enum PpiError {
    /// Configuration-related errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input-file structure errors during graph loading.
    #[error("load error: {0}")]
    Load(String),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde serialization/deserialization error.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for PPI network operations.
pub type Result<T> = std::result::Result<T, PpiError>;
