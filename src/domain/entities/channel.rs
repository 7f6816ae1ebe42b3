//! Discord channel entity.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Unique identifier for a Discord channel.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    /// Creates a channel ID from its string form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ChannelId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Discord channel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ChannelKind {
    /// Text channel.
    #[default]
    Text,
    /// Voice channel.
    Voice,
    /// Category channel.
    Category,
    /// Announcement channel.
    News,
    /// Stage voice channel.
    StageVoice,
    /// Forum channel.
    Forum,
    /// Any other raw channel type.
    Other(u8),
}

impl ChannelKind {
    /// Returns true if this is a category channel.
    #[must_use]
    pub fn is_category(self) -> bool {
        matches!(self, Self::Category)
    }

    /// Returns true if this is a plain text channel.
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }

    /// Returns true if this is a voice channel.
    #[must_use]
    pub fn is_voice(self) -> bool {
        matches!(self, Self::Voice | Self::StageVoice)
    }

    /// Returns the display prefix for this channel type.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Voice | Self::StageVoice => "🔊",
            Self::News => "📢",
            Self::Category => "",
            Self::Forum => "📋",
            _ => "#",
        }
    }
}

impl From<u8> for ChannelKind {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Text,
            2 => Self::Voice,
            4 => Self::Category,
            5 => Self::News,
            13 => Self::StageVoice,
            15 => Self::Forum,
            other => Self::Other(other),
        }
    }
}

impl From<ChannelKind> for u8 {
    fn from(kind: ChannelKind) -> Self {
        match kind {
            ChannelKind::Text => 0,
            ChannelKind::Voice => 2,
            ChannelKind::Category => 4,
            ChannelKind::News => 5,
            ChannelKind::StageVoice => 13,
            ChannelKind::Forum => 15,
            ChannelKind::Other(raw) => raw,
        }
    }
}

/// Ordering hint of a channel among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<i32>", into = "Option<i32>")]
pub enum Position {
    /// Channel carries an explicit position.
    Positioned(i32),
    /// No position was reported.
    #[default]
    Unpositioned,
}

impl Position {
    /// Returns the position value, if any.
    #[must_use]
    pub const fn value(self) -> Option<i32> {
        match self {
            Self::Positioned(value) => Some(value),
            Self::Unpositioned => None,
        }
    }

    /// Orders positioned values ascending, with unpositioned values last.
    #[must_use]
    pub fn cmp_unpositioned_last(self, other: Self) -> Ordering {
        match (self, other) {
            (Self::Positioned(a), Self::Positioned(b)) => a.cmp(&b),
            (Self::Positioned(_), Self::Unpositioned) => Ordering::Less,
            (Self::Unpositioned, Self::Positioned(_)) => Ordering::Greater,
            (Self::Unpositioned, Self::Unpositioned) => Ordering::Equal,
        }
    }
}

impl From<Option<i32>> for Position {
    fn from(value: Option<i32>) -> Self {
        value.map_or(Self::Unpositioned, Self::Positioned)
    }
}

impl From<Position> for Option<i32> {
    fn from(position: Position) -> Self {
        position.value()
    }
}

/// Discord guild channel information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    id: ChannelId,
    name: Option<String>,
    kind: ChannelKind,
    parent_id: Option<ChannelId>,
    position: Position,
}

impl Channel {
    /// Creates a new unpositioned, top-level channel.
    #[must_use]
    pub fn new(id: impl Into<ChannelId>, kind: ChannelKind) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind,
            parent_id: None,
            position: Position::Unpositioned,
        }
    }

    /// Sets the channel name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the parent category ID for this channel.
    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<ChannelId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Sets the position of this channel among its siblings.
    #[must_use]
    pub fn with_position(mut self, position: i32) -> Self {
        self.position = Position::Positioned(position);
        self
    }

    /// Returns the channel ID.
    #[must_use]
    pub fn id(&self) -> &ChannelId {
        &self.id
    }

    /// Returns the channel name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the channel type.
    #[must_use]
    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    /// Returns the parent category ID, if any.
    #[must_use]
    pub fn parent_id(&self) -> Option<&ChannelId> {
        self.parent_id.as_ref()
    }

    /// Returns the channel position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the display name with the channel type prefix.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}{}", self.kind.prefix(), self.name.as_deref().unwrap_or_default())
    }
}
