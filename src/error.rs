//! Error and Result types for Skizze operations.

use std::io;
use thiserror::Error;

/// A convenience `Result` type for Skizze operations.
pub type Result<T> = std::result::Result<T, SkizzeError>;

/// The error type for sketch engine operations.
#[derive(Debug, Error)]
pub enum SkizzeError {
    /// Sketch type tag is missing or not one of card/freq/rank/memb.
    #[error("invalid sketch type: {0:?}")]
    InvalidType(String),

    /// Creation parameters out of range, or an inserted key is oversized.
    #[error("invalid properties: {0}")]
    InvalidProperties(String),

    /// Duplicate sketch identity or domain name on create.
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// Unknown sketch identity or domain name.
    #[error("{0} not found")]
    NotFound(String),

    /// Insert attempted while a checkpoint is quiescing the sketch.
    #[error("sketch {0} is locked for checkpointing")]
    Locked(String),

    /// Serialized blob failed its kind/version check or parameter sanity.
    #[error("corrupt data for {key}: {reason}")]
    CorruptData { key: String, reason: String },

    /// Underlying storage backend I/O error.
    #[error("storage failure: {0}")]
    Storage(#[from] io::Error),

    /// Operation arrived after shutdown began.
    #[error("shutting down")]
    ShuttingDown,
}

impl SkizzeError {
    pub(crate) fn corrupt(key: &str, reason: impl Into<String>) -> Self {
        SkizzeError::CorruptData {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
