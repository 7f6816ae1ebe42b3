//! Remember channel use case.

use tracing::{debug, error};

use crate::application::services::LastChannelStore;
use crate::domain::entities::{ChannelId, GuildId};
use crate::domain::errors::StoreError;

/// Persists the channel a user opened so the guild reopens on it.
pub struct RememberChannelUseCase {
    last_channels: LastChannelStore,
}

impl RememberChannelUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(last_channels: LastChannelStore) -> Self {
        Self { last_channels }
    }

    /// Writes the guild's last channel.
    ///
    /// # Errors
    /// Returns error if the store rejects the write.
    pub async fn execute(&self, guild_id: &GuildId, channel_id: &ChannelId) -> Result<(), StoreError> {
        debug!(guild_id = %guild_id, channel_id = %channel_id, "Remembering opened channel");

        self.last_channels
            .set(guild_id, channel_id)
            .await
            .inspect_err(|e| {
                error!(guild_id = %guild_id, error = %e, "Failed to remember opened channel");
            })
    }
}
