//! Durable local key-value storage
//!
//! The Vibe app core persists exactly one thing: the session snapshot (an
//! authentication flag plus the current user profile), written as two keys
//! that travel together. This crate provides the storage boundary those
//! writes go through:
//!
//! - [`StorageEffects`] - the async key-value trait the app core is written
//!   against
//! - [`FilesystemStorageHandler`] - production handler, one file per key
//! - [`MemoryStorageHandler`] - in-memory handler for tests and ephemeral
//!   sessions
//!
//! Handlers are injected into the app core at construction time; nothing in
//! this crate is a global.

pub mod filesystem;
pub mod memory;

pub use filesystem::FilesystemStorageHandler;
pub use memory::MemoryStorageHandler;

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced by storage handlers.
///
/// Storage I/O failure is the only modeled failure kind at this boundary;
/// callers decide whether to surface or tolerate it.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key is not usable by the backend (e.g. empty)
    #[error("invalid storage key: {reason}")]
    InvalidKey { reason: String },

    /// A read from the backend failed
    #[error("storage read failed: {0}")]
    ReadFailed(String),

    /// A write to the backend failed
    #[error("storage write failed: {0}")]
    WriteFailed(String),

    /// A delete on the backend failed
    #[error("storage delete failed: {0}")]
    DeleteFailed(String),
}

/// Async key-value storage effects.
///
/// Values are opaque byte vectors; serialization is the caller's concern.
/// `retrieve` returns `Ok(None)` for absent keys - absence is not an error.
#[async_trait]
pub trait StorageEffects: Send + Sync {
    /// Store a value under a key, overwriting any previous value.
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Store several key-value pairs.
    ///
    /// Pairs that must land together (the session snapshot) go through this
    /// so a handler can make the group as atomic as its backend allows.
    async fn store_batch(&self, pairs: HashMap<String, Vec<u8>>) -> Result<(), StorageError>;

    /// Retrieve the value stored under a key, if any.
    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Retrieve several keys in one call. Absent keys are simply missing
    /// from the returned map.
    async fn retrieve_batch(
        &self,
        keys: &[String],
    ) -> Result<HashMap<String, Vec<u8>>, StorageError>;

    /// Remove a key. Returns whether the key existed.
    async fn remove(&self, key: &str) -> Result<bool, StorageError>;

    /// Remove everything this handler stores.
    async fn clear_all(&self) -> Result<(), StorageError>;
}
