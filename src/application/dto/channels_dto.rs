//! Channel loading DTOs.

use crate::domain::entities::{Channel, ChannelId, GuildId};

/// Identifies one fetch issued for a guild.
///
/// Generations increase with every guild change, so a ticket older than the
/// coordinator's current one belongs to a superseded fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    /// Guild the fetch was issued for.
    pub guild_id: GuildId,
    /// Generation the fetch was issued under.
    pub generation: u64,
}

impl LoadTicket {
    /// Creates new ticket.
    #[must_use]
    pub const fn new(guild_id: GuildId, generation: u64) -> Self {
        Self {
            guild_id,
            generation,
        }
    }
}

impl std::fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.guild_id, self.generation)
    }
}

/// Channels of a guild together with the channel remembered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedChannels {
    /// Channels in fetch order.
    pub channels: Vec<Channel>,
    /// Channel last opened in this guild, if any was stored.
    pub remembered: Option<ChannelId>,
}

impl FetchedChannels {
    /// Creates new fetch result.
    #[must_use]
    pub const fn new(channels: Vec<Channel>, remembered: Option<ChannelId>) -> Self {
        Self {
            channels,
            remembered,
        }
    }

    /// Returns true if no channel was fetched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
