//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Discord API client.
pub mod discord;
/// Selection storage adapters.
pub mod storage;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use discord::{DISCORD_API_BASE, DiscordChannelClient};
pub use storage::{FileSelectionStore, MemorySelectionStore};
