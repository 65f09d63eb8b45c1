//! Application error taxonomy
//!
//! Storage I/O is the only external failure source at this layer. Missing
//! mutation targets (a post or conversation id that no longer exists) are
//! not errors - the stores report them as a `bool` and leave state
//! untouched.

use thiserror::Error;
use vibe_store::StorageError;

/// Errors surfaced by the session workflows.
#[derive(Debug, Error)]
pub enum AppError {
    /// A profile mutation was requested while no user is logged in
    #[error("no user is logged in")]
    NotAuthenticated,

    /// The durable storage backend failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The session snapshot could not be serialized
    #[error("session snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
