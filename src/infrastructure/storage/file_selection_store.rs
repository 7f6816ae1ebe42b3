//! TOML file backed selection store.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::errors::StoreError;
use crate::domain::ports::SelectionStorePort;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SelectionDocument {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Selection store persisting every entry to one TOML file.
///
/// The file is read on first access and rewritten atomically on each `set`.
pub struct FileSelectionStore {
    path: PathBuf,
    document: Mutex<Option<SelectionDocument>>,
}

impl FileSelectionStore {
    /// Creates a store backed by the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: Mutex::new(None),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<SelectionDocument, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Selection file not found, starting empty");
                return Ok(SelectionDocument::default());
            }
            Err(e) => return Err(StoreError::ReadFailed(e.to_string())),
        };

        match toml::from_str::<SelectionDocument>(&content) {
            Ok(document) => Ok(document),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to parse selection file. Resetting it.");
                Ok(SelectionDocument::default())
            }
        }
    }

    fn write_document(path: &Path, document: &SelectionDocument) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(document)?;

        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[async_trait]
impl SelectionStorePort for FileSelectionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut guard = self.document.lock().await;
        if guard.is_none() {
            *guard = Some(self.read_document().await?);
        }

        Ok(guard
            .as_ref()
            .and_then(|document| document.entries.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut guard = self.document.lock().await;
        let mut document = match guard.as_ref() {
            Some(document) => document.clone(),
            None => self.read_document().await?,
        };

        document.entries.insert(key.to_string(), value.to_string());

        let path = self.path.clone();
        let snapshot = document.clone();
        tokio::task::spawn_blocking(move || Self::write_document(&path, &snapshot))
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))??;

        // Cache only what reached the disk.
        *guard = Some(document);

        debug!(path = %self.path.display(), key, "Selection file updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let store = FileSelectionStore::new(dir.path().join("selection.toml"));

        assert_eq!(store.get("lastChannel.1").await.unwrap(), None);
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_set_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("selection.toml");

        let store = FileSelectionStore::new(&path);
        store.set("lastChannel.1", "10").await.unwrap();
        store.set("lastChannel.2", "20").await.unwrap();
        store.set("lastChannel.1", "11").await.unwrap();

        let reopened = FileSelectionStore::new(&path);
        assert_eq!(
            reopened.get("lastChannel.1").await.unwrap(),
            Some("11".to_string())
        );
        assert_eq!(
            reopened.get("lastChannel.2").await.unwrap(),
            Some("20".to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_write_leaves_cache_untouched() {
        let dir = tempdir().unwrap();
        let state_dir = dir.path().join("state");
        let store = FileSelectionStore::new(state_dir.join("selection.toml"));

        assert_eq!(store.get("lastChannel.g").await.unwrap(), None);

        std::fs::write(&state_dir, "not a directory").unwrap();

        assert!(store.set("lastChannel.g", "c9").await.is_err());
        assert_eq!(store.get("lastChannel.g").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_malformed_file_is_reset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("selection.toml");
        std::fs::write(&path, "entries = [").unwrap();

        let store = FileSelectionStore::new(&path);
        assert_eq!(store.get("lastChannel.1").await.unwrap(), None);

        store.set("lastChannel.1", "5").await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let document: SelectionDocument = toml::from_str(&content).unwrap();
        assert_eq!(document.entries.len(), 1);
        assert_eq!(document.entries.get("lastChannel.1"), Some(&"5".to_string()));
    }
}
