//! Typed per-guild memory of the last opened channel.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{ChannelId, GuildId};
use crate::domain::errors::StoreError;
use crate::domain::ports::SelectionStorePort;

const KEY_PREFIX: &str = "lastChannel.";

/// Maps guilds to the channel last opened in them.
#[derive(Clone)]
pub struct LastChannelStore {
    store: Arc<dyn SelectionStorePort>,
}

impl LastChannelStore {
    /// Wraps a key-value store.
    #[must_use]
    pub fn new(store: Arc<dyn SelectionStorePort>) -> Self {
        Self { store }
    }

    /// Returns the store key of a guild.
    #[must_use]
    pub fn key_for(guild_id: &GuildId) -> String {
        format!("{KEY_PREFIX}{guild_id}")
    }

    /// Returns the channel last opened in a guild.
    ///
    /// Read failures count as nothing remembered.
    pub async fn get(&self, guild_id: &GuildId) -> Option<ChannelId> {
        match self.store.get(&Self::key_for(guild_id)).await {
            Ok(value) => {
                debug!(guild_id = %guild_id, remembered = ?value, "Looked up last channel");
                value.filter(|v| !v.is_empty()).map(ChannelId::from)
            }
            Err(e) => {
                warn!(guild_id = %guild_id, error = %e, "Failed to read last channel");
                None
            }
        }
    }

    /// Remembers the channel opened in a guild.
    ///
    /// # Errors
    /// Returns error if the underlying store rejects the write.
    pub async fn set(&self, guild_id: &GuildId, channel_id: &ChannelId) -> Result<(), StoreError> {
        self.store
            .set(&Self::key_for(guild_id), channel_id.as_str())
            .await?;
        debug!(guild_id = %guild_id, channel_id = %channel_id, "Remembered last channel");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockSelectionStore;

    #[test]
    fn test_key_format() {
        assert_eq!(
            LastChannelStore::key_for(&GuildId::from("81384788765712384")),
            "lastChannel.81384788765712384"
        );
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let raw = Arc::new(MockSelectionStore::new());
        let store = LastChannelStore::new(raw.clone());
        let guild = GuildId::from("g1");

        assert_eq!(store.get(&guild).await, None);
        tokio_test::assert_ok!(store.set(&guild, &ChannelId::from("c9")).await);

        assert_eq!(store.get(&guild).await, Some(ChannelId::from("c9")));
        assert!(raw.contains("lastChannel.g1").await.unwrap());
    }

    #[tokio::test]
    async fn test_guilds_do_not_share_entries() {
        let store = LastChannelStore::new(Arc::new(MockSelectionStore::with_entry(
            "lastChannel.a",
            "1",
        )));

        assert_eq!(store.get(&GuildId::from("a")).await, Some(ChannelId::from("1")));
        assert_eq!(store.get(&GuildId::from("b")).await, None);
    }

    #[tokio::test]
    async fn test_read_failure_is_treated_as_absent() {
        let raw = Arc::new(MockSelectionStore::with_entry("lastChannel.a", "1"));
        raw.set_failing(true);
        let store = LastChannelStore::new(raw);

        assert_eq!(store.get(&GuildId::from("a")).await, None);
        tokio_test::assert_err!(store.set(&GuildId::from("a"), &ChannelId::from("2")).await);
    }
}
