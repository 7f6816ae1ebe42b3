use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "guildnav",
    version,
    about = "Resolve a Discord guild's channel hierarchy and active channel",
    long_about = None
)]
pub struct CliArgs {
    /// Guild to load.
    #[arg(short, long, value_name = "ID")]
    pub guild: String,

    /// Discord token.
    #[arg(long, env = "GUILDNAV_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Rules channel of the guild, labelled with its own glyph.
    #[arg(long, value_name = "CHANNEL_ID")]
    pub rules_channel: Option<String>,

    /// Open this channel and remember it for the guild.
    #[arg(long, value_name = "CHANNEL_ID")]
    pub open: Option<String>,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Discord REST API base URL.
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Selection file path.
    #[arg(long, value_name = "PATH")]
    pub state_path: Option<PathBuf>,
}
