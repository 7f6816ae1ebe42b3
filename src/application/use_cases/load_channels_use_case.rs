//! Load channels use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::FetchedChannels;
use crate::application::services::LastChannelStore;
use crate::domain::entities::GuildId;
use crate::domain::errors::ChannelFetchError;
use crate::domain::ports::ChannelRepositoryPort;

/// Fetches a guild's channels and looks up the channel remembered for it.
#[derive(Clone)]
pub struct LoadChannelsUseCase {
    repository: Arc<dyn ChannelRepositoryPort>,
    last_channels: LastChannelStore,
}

impl LoadChannelsUseCase {
    /// Creates new load channels use case.
    #[must_use]
    pub const fn new(repository: Arc<dyn ChannelRepositoryPort>, last_channels: LastChannelStore) -> Self {
        Self {
            repository,
            last_channels,
        }
    }

    /// Executes the fetch for a guild.
    ///
    /// The remembered channel is only looked up when the fetch returned
    /// channels.
    ///
    /// # Errors
    /// Returns error if the guild id is blank or the fetch fails.
    pub async fn execute(&self, guild_id: &GuildId) -> Result<FetchedChannels, ChannelFetchError> {
        if guild_id.is_blank() {
            warn!("Refusing to fetch channels for a blank guild id");
            return Err(ChannelFetchError::invalid_guild("guild id must not be empty"));
        }

        debug!(guild_id = %guild_id, "Fetching guild channels");

        let channels = self
            .repository
            .fetch_channels(guild_id)
            .await
            .inspect_err(|e| warn!(guild_id = %guild_id, error = %e, "Channel fetch failed"))?;

        if channels.is_empty() {
            info!(guild_id = %guild_id, "Guild has no channels");
            return Ok(FetchedChannels::new(channels, None));
        }

        let remembered = self.last_channels.get(guild_id).await;

        info!(
            guild_id = %guild_id,
            count = channels.len(),
            remembered = ?remembered,
            "Loaded guild channels"
        );

        Ok(FetchedChannels::new(channels, remembered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Channel, ChannelId, ChannelKind};
    use crate::domain::ports::MockChannelRepositoryPort;
    use crate::domain::ports::mocks::MockSelectionStore;

    fn last_channels(entry: Option<(&str, &str)>) -> LastChannelStore {
        let store = match entry {
            Some((key, value)) => MockSelectionStore::with_entry(key, value),
            None => MockSelectionStore::new(),
        };
        LastChannelStore::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_fetch_with_remembered_channel() {
        let mut repository = MockChannelRepositoryPort::new();
        repository
            .expect_fetch_channels()
            .withf(|guild_id| guild_id.as_str() == "g1")
            .times(1)
            .returning(|_| Ok(vec![Channel::new("c2", ChannelKind::Text)]));

        let use_case = LoadChannelsUseCase::new(
            Arc::new(repository),
            last_channels(Some(("lastChannel.g1", "c2"))),
        );

        let fetched = use_case.execute(&GuildId::from("g1")).await.unwrap();

        assert_eq!(fetched.channels.len(), 1);
        assert_eq!(fetched.remembered, Some(ChannelId::from("c2")));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_returned() {
        let mut repository = MockChannelRepositoryPort::new();
        repository
            .expect_fetch_channels()
            .returning(|_| Err(ChannelFetchError::network("offline")));

        let use_case = LoadChannelsUseCase::new(Arc::new(repository), last_channels(None));

        let result = use_case.execute(&GuildId::from("g1")).await;

        assert!(matches!(result, Err(ChannelFetchError::NetworkError { .. })));
    }

    #[tokio::test]
    async fn test_blank_guild_is_rejected_without_fetch() {
        let mut repository = MockChannelRepositoryPort::new();
        repository.expect_fetch_channels().never();

        let use_case = LoadChannelsUseCase::new(Arc::new(repository), last_channels(None));

        let result = use_case.execute(&GuildId::from("")).await;

        assert!(matches!(result, Err(ChannelFetchError::InvalidGuildId { .. })));
    }

    #[tokio::test]
    async fn test_empty_guild_skips_lookup() {
        let mut repository = MockChannelRepositoryPort::new();
        repository.expect_fetch_channels().returning(|_| Ok(Vec::new()));

        let use_case = LoadChannelsUseCase::new(
            Arc::new(repository),
            last_channels(Some(("lastChannel.g1", "c2"))),
        );

        let fetched = use_case.execute(&GuildId::from("g1")).await.unwrap();

        assert!(fetched.is_empty());
        assert_eq!(fetched.remembered, None);
    }
}
