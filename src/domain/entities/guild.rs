//! Discord guild entity.

use serde::{Deserialize, Serialize};

use super::{Channel, ChannelId};

/// Unique identifier for a Discord guild (server).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildId(String);

impl GuildId {
    /// Creates a guild ID from its string form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the ID is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for GuildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GuildId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for GuildId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Discord guild (server) information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guild {
    id: GuildId,
    name: String,
    rules_channel_id: Option<ChannelId>,
}

impl Guild {
    /// Creates a new guild with the given ID and name.
    #[must_use]
    pub fn new(id: impl Into<GuildId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rules_channel_id: None,
        }
    }

    /// Sets the rules channel.
    #[must_use]
    pub fn with_rules_channel(mut self, channel_id: impl Into<ChannelId>) -> Self {
        self.rules_channel_id = Some(channel_id.into());
        self
    }

    /// Returns the guild ID.
    #[must_use]
    pub const fn id(&self) -> &GuildId {
        &self.id
    }

    /// Returns the guild name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rules channel ID.
    #[must_use]
    pub fn rules_channel_id(&self) -> Option<&ChannelId> {
        self.rules_channel_id.as_ref()
    }

    /// Returns true if the channel is this guild's rules channel.
    #[must_use]
    pub fn is_rules_channel(&self, channel_id: &ChannelId) -> bool {
        self.rules_channel_id.as_ref() == Some(channel_id)
    }

    /// Returns the glyph used to label a channel of this guild.
    #[must_use]
    pub fn channel_glyph(&self, channel: &Channel) -> &'static str {
        if self.is_rules_channel(channel.id()) {
            "📰"
        } else {
            channel.kind().prefix()
        }
    }
}
