//! Error handling for the rollguard boot path
//!
//! All guard failures are surfaced as typed variants so the embedding
//! caller can decide how to halt. The guard core never terminates the
//! process itself.

use thiserror::Error;

/// Main error type for the rollback guard
///
/// Every variant is fatal by contract: none of these conditions is
/// retryable within a single boot, and the caller must not continue
/// startup after receiving one.
#[derive(Error, Debug)]
pub enum RollguardError {
    #[error("marker data does not match the <magic>-<version> format")]
    InvalidFormat,

    #[error("marker magic mismatch: expected {expected}, found {found}")]
    InvalidMagic { expected: u32, found: u32 },

    #[error("rollback detected: persisted version {persisted} is newer than build version {current}")]
    RollbackDetected { persisted: u32, current: u32 },

    #[error("marker persistence failed: {operation}")]
    Persistence {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {message}")]
    Config { message: String },
}

/// Type alias for Result with RollguardError
pub type RollguardResult<T> = Result<T, RollguardError>;

impl RollguardError {
    /// Create a persistence error for a named store operation
    pub fn persistence(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Persistence {
            operation: operation.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a magic-mismatch error
    pub fn invalid_magic(expected: u32, found: u32) -> Self {
        Self::InvalidMagic { expected, found }
    }

    /// Create a rollback-detected error
    pub fn rollback(persisted: u32, current: u32) -> Self {
        Self::RollbackDetected { persisted, current }
    }
}
