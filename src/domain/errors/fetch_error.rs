//! Channel fetch error types.

use thiserror::Error;

/// Channel fetch error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ChannelFetchError {
    #[error("invalid guild id: {reason}")]
    InvalidGuildId { reason: String },

    #[error("token rejected by Discord: {message}")]
    Unauthorized { message: String },

    #[error("access to guild denied: {message}")]
    Forbidden { message: String },

    #[error("guild {guild_id} not found")]
    NotFound { guild_id: String },

    #[error("network error while fetching channels: {message}")]
    NetworkError { message: String },

    #[error("rate limited by Discord, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    #[error("failed to decode channel list: {message}")]
    Decode { message: String },

    #[error("unexpected channel fetch error: {message}")]
    Unexpected { message: String },
}

impl ChannelFetchError {
    /// Creates invalid guild id error.
    #[must_use]
    pub fn invalid_guild(reason: impl Into<String>) -> Self {
        Self::InvalidGuildId {
            reason: reason.into(),
        }
    }

    /// Creates unauthorized error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates forbidden error.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Creates not found error.
    #[must_use]
    pub fn not_found(guild_id: impl Into<String>) -> Self {
        Self::NotFound {
            guild_id: guild_id.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether a later reload could succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::RateLimited { .. } | Self::Unexpected { .. }
        )
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::RateLimited { .. })
    }
}
