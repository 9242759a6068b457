//! Directory-backed key-value storage.
//!
//! Each key maps to `<root>/<key>.json`. Writes land in a temporary sibling
//! file first and are renamed into place, so readers see either the old or
//! the new value.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use clubdesk_core::{AppError, AppResult};
use tracing::debug;

use crate::KeyValueStorage;

/// Key-value storage persisted as one file per key inside a directory.
#[derive(Debug, Clone)]
pub struct DirectoryKeyValueStorage {
    root: PathBuf,
}

impl DirectoryKeyValueStorage {
    /// Opens a storage profile rooted at `root`, creating the directory if
    /// needed.
    pub async fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await.map_err(|error| {
            AppError::Internal(format!(
                "failed to create storage directory '{}': {error}",
                root.display()
            ))
        })?;

        Ok(Self { root })
    }

    /// Returns the storage directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    fn item_path(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key.chars().all(|character| {
                character.is_ascii_alphanumeric() || matches!(character, '-' | '_')
            });
        if !valid {
            return Err(AppError::Validation(format!(
                "storage key '{key}' must be non-empty ASCII letters, digits, '-' or '_'"
            )));
        }

        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStorage for DirectoryKeyValueStorage {
    async fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.item_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => {
                debug!(path = %path.display(), bytes = value.len(), "storage item read");
                Ok(Some(value))
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(AppError::Internal(format!(
                "failed to read storage item '{}': {error}",
                path.display()
            ))),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.item_path(key)?;
        let staging_path = self.root.join(format!("{key}.json.tmp"));

        tokio::fs::write(&staging_path, value)
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to write storage item '{}': {error}",
                    staging_path.display()
                ))
            })?;
        tokio::fs::rename(&staging_path, &path)
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to replace storage item '{}': {error}",
                    path.display()
                ))
            })?;

        debug!(path = %path.display(), bytes = value.len(), "storage item written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::DirectoryKeyValueStorage;
    use crate::KeyValueStorage;

    fn scratch_dir(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir().join(format!("clubdesk-{label}-{}-{nanos}", std::process::id()))
    }

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let storage = DirectoryKeyValueStorage::open(scratch_dir("missing")).await;
        assert!(storage.is_ok());
        let storage = storage.unwrap_or_else(|_| unreachable!());

        assert_eq!(storage.get_item("applications").await.ok(), Some(None));
        let _ = tokio::fs::remove_dir_all(storage.root()).await;
    }

    #[tokio::test]
    async fn values_survive_reopening() {
        let root = scratch_dir("reopen");
        let storage = DirectoryKeyValueStorage::open(root.clone())
            .await
            .unwrap_or_else(|_| unreachable!());
        assert!(storage.set_item("applications", "[]").await.is_ok());
        assert!(storage.set_item("applications", "[{}]").await.is_ok());

        let reopened = DirectoryKeyValueStorage::open(root.clone())
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(
            reopened.get_item("applications").await.ok().flatten(),
            Some("[{}]".to_owned())
        );
        assert!(!root.join("applications.json.tmp").exists());
        let _ = tokio::fs::remove_dir_all(root).await;
    }

    #[tokio::test]
    async fn keys_cannot_escape_the_directory() {
        let storage = DirectoryKeyValueStorage::open(scratch_dir("escape"))
            .await
            .unwrap_or_else(|_| unreachable!());

        assert!(storage.set_item("../outside", "x").await.is_err());
        assert!(storage.get_item("").await.is_err());
        let _ = tokio::fs::remove_dir_all(storage.root()).await;
    }
}
