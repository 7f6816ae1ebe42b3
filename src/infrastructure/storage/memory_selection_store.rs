//! In-memory selection store.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::errors::StoreError;
use crate::domain::ports::SelectionStorePort;

/// Selection store that forgets everything when dropped.
/// Used when no state path is available.
#[derive(Default)]
pub struct MemorySelectionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySelectionStore {
    /// Creates new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SelectionStorePort for MemorySelectionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemorySelectionStore::new();

        assert!(!store.contains("k").await.unwrap());
        store.set("k", "v").await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
    }
}
