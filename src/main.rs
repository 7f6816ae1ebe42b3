use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use guildnav::application::{
    ChannelListCoordinator, ChannelLoader, CoordinatorEvent, LastChannelStore,
    LoadChannelsUseCase, RememberChannelUseCase,
};
use guildnav::domain::{ChannelId, Guild, SelectionStorePort};
use guildnav::infrastructure::{
    AppConfig, CliArgs, DiscordChannelClient, FileSelectionStore, MemorySelectionStore,
    StorageManager,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<(AppConfig, Option<StorageManager>)> {
    let storage = StorageManager::new().ok();
    let mut config = match (&storage, args.config.as_deref()) {
        (Some(storage), path) => storage.load_config(path)?,
        (None, Some(path)) => StorageManager::with_dir(PathBuf::new()).load_config(Some(path))?,
        (None, None) => AppConfig::default(),
    };
    config.merge_with_args(args);
    Ok((config, storage))
}

fn selection_store(
    config: &AppConfig,
    storage: Option<&StorageManager>,
) -> Arc<dyn SelectionStorePort> {
    if let Some(path) = config.effective_state_path(storage) {
        debug!(path = %path.display(), "Using selection file");
        Arc::new(FileSelectionStore::new(path))
    } else {
        warn!("No state path available, selections will not survive restarts");
        Arc::new(MemorySelectionStore::new())
    }
}

fn print_channels(guild: &Guild, coordinator: &ChannelListCoordinator) {
    let selection = coordinator.selection();

    for group in coordinator.hierarchy() {
        println!("{}", group.title());
        for channel in &group.channels {
            let marker = if selection == Some(channel.id()) { ">" } else { " " };
            println!(
                "{marker} {} {}",
                guild.channel_glyph(channel),
                channel.display_name()
            );
        }
    }

    match selection {
        Some(channel_id) => println!("selected: {channel_id}"),
        None => println!("selected: none"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let args = CliArgs::parse();
    let (config, storage) = load_config(&args)?;

    init_logging(&config)?;

    info!(version = guildnav::VERSION, "Starting {}", guildnav::NAME);

    let token = args
        .token
        .clone()
        .ok_or_else(|| eyre!("no token given, pass --token or set GUILDNAV_TOKEN"))?;

    let repository = Arc::new(DiscordChannelClient::with_base_url(
        token,
        config.api.base_url.clone(),
        config.request_timeout(),
    )?);
    let last_channels = LastChannelStore::new(selection_store(&config, storage.as_ref()));

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let loader = ChannelLoader::new(
        LoadChannelsUseCase::new(repository, last_channels.clone()),
        RememberChannelUseCase::new(last_channels),
        command_rx,
        action_tx,
    );
    let loader_handle = tokio::spawn(loader.run());

    let mut guild = Guild::new(args.guild.as_str(), args.guild.as_str());
    if let Some(rules_channel) = &args.rules_channel {
        guild = guild.with_rules_channel(rules_channel.as_str());
    }

    let mut coordinator = ChannelListCoordinator::new(command_tx, event_tx);
    coordinator.set_guild(guild.id().clone());

    while !coordinator.state().is_settled() {
        let Some(action) = action_rx.recv().await else {
            break;
        };
        coordinator.handle_action(action);
    }

    while let Ok(event) = event_rx.try_recv() {
        match event {
            CoordinatorEvent::PhaseAdvanced(phase) => info!(phase = ?phase, "Load phase advanced"),
            CoordinatorEvent::ChannelsReady {
                guild_id,
                selection,
            } => debug!(guild_id = %guild_id, selection = ?selection, "Channels ready"),
            CoordinatorEvent::ChannelsUnavailable { guild_id } => {
                warn!(guild_id = %guild_id, "No channels available");
            }
        }
    }

    print_channels(&guild, &coordinator);
    println!("state: {:?}", coordinator.state());

    if let Some(channel_id) = args.open {
        let channel_id = ChannelId::new(channel_id);
        if !coordinator.open_channel(channel_id.clone()) {
            println!("warning: {channel_id} is not a channel of this guild");
        }
        if let Some(opened) = coordinator.selection() {
            println!("opened: {opened}");
        }
    }

    drop(coordinator);
    loader_handle.await?;

    info!("Shutting down");
    Ok(())
}
