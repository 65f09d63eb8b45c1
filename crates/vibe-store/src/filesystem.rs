//! Filesystem-based storage handler
//!
//! Stores each key as a `<key>.dat` file under a base directory. Keys may
//! contain `/` separators, which map to subdirectories.

use crate::{StorageEffects, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;

/// Filesystem-based storage handler for production use.
///
/// Stateless apart from the base path; every operation delegates to the
/// filesystem.
#[derive(Debug, Clone)]
pub struct FilesystemStorageHandler {
    /// Base directory for storage files
    base_path: PathBuf,
}

impl FilesystemStorageHandler {
    /// Create a new filesystem storage handler rooted at `base_path`
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// The directory this handler stores files under.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.dat", key))
    }
}

#[async_trait]
impl StorageEffects for FilesystemStorageHandler {
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey {
                reason: "key cannot be empty".to_string(),
            });
        }

        let file_path = self.file_path(key);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::WriteFailed(format!("failed to create directory: {}", e))
            })?;
        }

        fs::write(&file_path, value)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("failed to write file: {}", e)))?;

        tracing::trace!(key, "stored value");
        Ok(())
    }

    async fn store_batch(&self, pairs: HashMap<String, Vec<u8>>) -> Result<(), StorageError> {
        for (key, value) in pairs {
            self.store(&key, value).await?;
        }
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let file_path = self.file_path(key);

        match fs::read(&file_path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(format!(
                "failed to read file: {}",
                e
            ))),
        }
    }

    async fn retrieve_batch(
        &self,
        keys: &[String],
    ) -> Result<HashMap<String, Vec<u8>>, StorageError> {
        let mut result = HashMap::new();
        for key in keys {
            if let Some(value) = self.retrieve(key).await? {
                result.insert(key.clone(), value);
            }
        }
        Ok(result)
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let file_path = self.file_path(key);

        match fs::remove_file(&file_path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::DeleteFailed(format!(
                "failed to remove file: {}",
                e
            ))),
        }
    }

    async fn clear_all(&self) -> Result<(), StorageError> {
        match fs::remove_dir_all(&self.base_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(StorageError::DeleteFailed(format!(
                    "failed to remove storage directory: {}",
                    e
                )))
            }
        }

        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::WriteFailed(format!("failed to recreate storage directory: {}", e))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_handler() -> (tempfile::TempDir, FilesystemStorageHandler) {
        let dir = tempfile::tempdir().unwrap();
        let handler = FilesystemStorageHandler::new(dir.path().to_path_buf());
        (dir, handler)
    }

    #[tokio::test]
    async fn test_store_retrieve_remove() {
        let (dir, storage) = temp_handler();
        assert_eq!(storage.base_path(), &dir.path().to_path_buf());

        storage.store("session", b"payload".to_vec()).await.unwrap();
        assert_eq!(
            storage.retrieve("session").await.unwrap(),
            Some(b"payload".to_vec())
        );

        assert!(storage.remove("session").await.unwrap());
        assert_eq!(storage.retrieve("session").await.unwrap(), None);
        assert!(!storage.remove("session").await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let (_dir, storage) = temp_handler();
        assert_eq!(storage.retrieve("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_nested_keys_create_subdirectories() {
        let (_dir, storage) = temp_handler();

        storage
            .store("session/profile", b"nested".to_vec())
            .await
            .unwrap();
        assert_eq!(
            storage.retrieve("session/profile").await.unwrap(),
            Some(b"nested".to_vec())
        );
    }

    #[tokio::test]
    async fn test_clear_all_recreates_base_dir() {
        let (_dir, storage) = temp_handler();

        storage.store("a", b"1".to_vec()).await.unwrap();
        storage.clear_all().await.unwrap();

        assert_eq!(storage.retrieve("a").await.unwrap(), None);
        // The base directory survives for subsequent writes.
        storage.store("b", b"2".to_vec()).await.unwrap();
        assert_eq!(storage.retrieve("b").await.unwrap(), Some(b"2".to_vec()));
    }

    #[tokio::test]
    async fn test_empty_key_rejected() {
        let (_dir, storage) = temp_handler();
        let err = storage.store("", b"x".to_vec()).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey { .. }));
    }
}
