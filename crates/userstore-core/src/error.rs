//! Error types for userstore operations.
//!
//! A missing identifier is the only error a caller is expected to cause.
//! Everything else is a storage failure and is surfaced as such, so a
//! caller can never mistake a failed read or write for an empty or
//! successfully updated collection.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::UserId;

/// The unified error type for userstore operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The identifier is not present in the collection.
    #[error("user not found: {id}")]
    NotFound { id: UserId },

    /// The durable collection exists but could not be loaded.
    #[error("failed to load users: {0}")]
    Load(#[from] LoadError),

    /// The collection cannot name a new user without clobbering one.
    #[error("cannot allocate user id: {0}")]
    Allocation(#[from] AllocError),

    /// The mutated collection could not be written back.
    #[error("persistence failed: {0}")]
    PersistenceFailed(#[from] PersistError),
}

impl Error {
    /// Create a not-found error for the given identifier.
    pub fn not_found(id: impl Into<UserId>) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Check if this error was caused by an absent identifier.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Errors raised while reading the durable collection.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but does not hold a valid collection.
    #[error("corrupt collection in {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised when the counter cannot produce a fresh identifier.
///
/// Both mean the stored collection breaks its own invariant (every key is
/// at most `increment`), so nothing is written.
#[derive(Debug, Error)]
pub enum AllocError {
    /// The counter is already at its maximum value.
    #[error("counter exhausted at {increment}")]
    CounterExhausted { increment: u64 },

    /// The next identifier is already taken by a stored user.
    #[error("identifier {id} is already in use")]
    InUse { id: UserId },
}

/// Errors raised while writing the durable collection.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The collection could not be serialized.
    #[error("cannot encode collection: {0}")]
    Encode(#[source] serde_json::Error),

    /// A filesystem step (lock, write, sync, rename) failed.
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
