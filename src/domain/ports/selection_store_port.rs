//! Selection store port definition.

use async_trait::async_trait;

use crate::domain::errors::StoreError;

/// Port for durable string key-value persistence of selections.
#[async_trait]
pub trait SelectionStorePort: Send + Sync {
    /// Retrieves the value stored under a key.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores a value under a key, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Checks if a key has a value.
    async fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key).await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    /// Mock selection store that can be switched into a failing mode.
    pub struct MockSelectionStore {
        entries: Arc<RwLock<std::collections::HashMap<String, String>>>,
        failing: AtomicBool,
    }

    impl MockSelectionStore {
        /// Creates empty mock storage.
        pub fn new() -> Self {
            Self {
                entries: Arc::new(RwLock::new(std::collections::HashMap::new())),
                failing: AtomicBool::new(false),
            }
        }

        /// Creates mock storage with one entry.
        pub fn with_entry(key: &str, value: &str) -> Self {
            let store = Self::new();
            store
                .entries
                .try_write()
                .expect("fresh lock")
                .insert(key.to_string(), value.to_string());
            store
        }

        /// Makes every subsequent call fail.
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn check(&self) -> Result<(), StoreError> {
            if self.failing.load(Ordering::SeqCst) {
                Err(StoreError::NotAvailable("mock failure".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl Default for MockSelectionStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl SelectionStorePort for MockSelectionStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.check()?;
            Ok(self.entries.read().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.check()?;
            self.entries
                .write()
                .await
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
