//! Discord API HTTP client for guild channels.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use tracing::{debug, warn};

use super::dto::{ChannelResponse, ErrorResponse};
use crate::domain::entities::{Channel, GuildId};
use crate::domain::errors::ChannelFetchError;
use crate::domain::ports::ChannelRepositoryPort;

/// Default Discord REST API base URL.
pub const DISCORD_API_BASE: &str = "https://discord.com/api/v10";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Discord API channel client.
pub struct DiscordChannelClient {
    client: Client,
    base_url: String,
    token: String,
}

impl DiscordChannelClient {
    /// Creates new client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(token: impl Into<String>) -> Result<Self, ChannelFetchError> {
        Self::with_base_url(token, DISCORD_API_BASE, DEFAULT_TIMEOUT)
    }

    /// Creates client with custom base URL and request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ChannelFetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                ChannelFetchError::unexpected(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn channels_url(&self, guild_id: &GuildId) -> String {
        format!("{}/guilds/{}/channels", self.base_url, guild_id)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    async fn handle_error_response(
        guild_id: &GuildId,
        status: StatusCode,
        response: reqwest::Response,
    ) -> ChannelFetchError {
        let retry_after_ms = response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<f64>().ok())
            .map_or(5000, |secs| (secs * 1000.0) as u64);

        let error_message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => format!("HTTP {status}"),
        };

        match status {
            StatusCode::UNAUTHORIZED => ChannelFetchError::unauthorized("invalid or expired token"),
            StatusCode::FORBIDDEN => ChannelFetchError::forbidden(error_message),
            StatusCode::NOT_FOUND => ChannelFetchError::not_found(guild_id.as_str()),
            StatusCode::TOO_MANY_REQUESTS => ChannelFetchError::RateLimited { retry_after_ms },
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                ChannelFetchError::network("Discord API is temporarily unavailable")
            }
            _ => ChannelFetchError::unexpected(format!(
                "unexpected response: {status} - {error_message}"
            )),
        }
    }
}

#[async_trait]
impl ChannelRepositoryPort for DiscordChannelClient {
    async fn fetch_channels(&self, guild_id: &GuildId) -> Result<Vec<Channel>, ChannelFetchError> {
        if guild_id.is_blank() {
            return Err(ChannelFetchError::invalid_guild("guild id must not be empty"));
        }

        let url = self.channels_url(guild_id);

        debug!(guild_id = %guild_id, "Requesting guild channels from Discord API");

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, &self.token)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to connect to Discord API");
                if e.is_timeout() {
                    ChannelFetchError::network("request timed out")
                } else if e.is_connect() {
                    ChannelFetchError::network("failed to connect to Discord")
                } else {
                    ChannelFetchError::network(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_error_response(guild_id, status, response).await);
        }

        let channels: Vec<ChannelResponse> = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse channel list response");
            ChannelFetchError::decode(e.to_string())
        })?;

        debug!(
            guild_id = %guild_id,
            count = channels.len(),
            "Guild channels received"
        );

        Ok(channels.into_iter().map(Channel::from).collect())
    }
}
