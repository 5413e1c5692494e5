//! Core Error Types
//!
//! Defines the foundational error types used across the Nebula Agent
//! workspace. These are dependency-free (only thiserror + serde_json) to
//! keep the core crate lightweight.
//!
//! The analysis pipeline itself is total and never produces these; they
//! exist for the seams around it (configuration, the credit gate, the task
//! ledger).

use thiserror::Error;

/// Core error type for the Nebula Agent workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Credit gate refused or failed an authorization
    #[error("Credit gate error: {0}")]
    Gate(String),

    /// Task ledger recording failed
    #[error("Ledger error: {0}")]
    Ledger(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a gate error
    pub fn gate(msg: impl Into<String>) -> Self {
        Self::Gate(msg.into())
    }

    /// Create a ledger error
    pub fn ledger(msg: impl Into<String>) -> Self {
        Self::Ledger(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
