//! Background worker executing channel fetches and selection writes.

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::application::dto::{FetchedChannels, LoadTicket};
use crate::application::use_cases::{LoadChannelsUseCase, RememberChannelUseCase};
use crate::domain::entities::{ChannelId, GuildId};
use crate::domain::errors::ChannelFetchError;

/// Result delivered back to the coordinator.
#[derive(Debug)]
pub enum LoaderAction {
    ChannelsLoaded {
        ticket: LoadTicket,
        fetched: FetchedChannels,
    },
    ChannelsLoadFailed {
        ticket: LoadTicket,
        error: ChannelFetchError,
    },
}

impl LoaderAction {
    /// Returns the ticket the action answers.
    #[must_use]
    pub const fn ticket(&self) -> &LoadTicket {
        match self {
            Self::ChannelsLoaded { ticket, .. } | Self::ChannelsLoadFailed { ticket, .. } => ticket,
        }
    }
}

/// Work requested by the coordinator.
#[derive(Debug)]
pub enum LoaderCommand {
    FetchChannels {
        ticket: LoadTicket,
    },
    RememberChannel {
        guild_id: GuildId,
        channel_id: ChannelId,
    },
}

/// Worker that runs fetches concurrently and selection writes in order.
pub struct ChannelLoader {
    load_channels: LoadChannelsUseCase,
    remember_channel: RememberChannelUseCase,
    command_rx: mpsc::UnboundedReceiver<LoaderCommand>,
    action_tx: mpsc::UnboundedSender<LoaderAction>,
}

impl ChannelLoader {
    pub fn new(
        load_channels: LoadChannelsUseCase,
        remember_channel: RememberChannelUseCase,
        command_rx: mpsc::UnboundedReceiver<LoaderCommand>,
        action_tx: mpsc::UnboundedSender<LoaderAction>,
    ) -> Self {
        Self {
            load_channels,
            remember_channel,
            command_rx,
            action_tx,
        }
    }

    /// Processes commands until every command sender is dropped, then waits
    /// for fetches still in flight.
    pub async fn run(mut self) {
        info!("Channel loader started");
        let mut fetches = JoinSet::new();

        while let Some(command) = self.command_rx.recv().await {
            match command {
                LoaderCommand::FetchChannels { ticket } => {
                    let use_case = self.load_channels.clone();
                    let action_tx = self.action_tx.clone();
                    fetches.spawn(async move {
                        let action = match use_case.execute(&ticket.guild_id).await {
                            Ok(fetched) => LoaderAction::ChannelsLoaded { ticket, fetched },
                            Err(error) => LoaderAction::ChannelsLoadFailed { ticket, error },
                        };
                        if action_tx.send(action).is_err() {
                            debug!("Coordinator gone, dropping channel fetch result");
                        }
                    });
                }
                LoaderCommand::RememberChannel {
                    guild_id,
                    channel_id,
                } => {
                    if let Err(e) = self.remember_channel.execute(&guild_id, &channel_id).await {
                        warn!(guild_id = %guild_id, error = %e, "Selection was not persisted");
                    }
                }
            }

            while fetches.try_join_next().is_some() {}
        }

        while fetches.join_next().await.is_some() {}
        info!("Channel loader stopped");
    }
}
