//! Channel repository port for fetching a guild's channel list.

use async_trait::async_trait;

use crate::domain::entities::{Channel, GuildId};
use crate::domain::errors::ChannelFetchError;

/// Port for fetching the channels of a guild.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChannelRepositoryPort: Send + Sync {
    /// Fetches the complete, unordered channel list of a guild.
    async fn fetch_channels(&self, guild_id: &GuildId) -> Result<Vec<Channel>, ChannelFetchError>;
}
