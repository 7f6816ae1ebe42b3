//! Channel list state of one guild view.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::dto::{FetchedChannels, LoadTicket};
use crate::application::loader::{LoaderAction, LoaderCommand};
use crate::application::services::{CategoryGroup, HierarchyBuilder, SelectionResolver};
use crate::domain::entities::{Channel, ChannelId, GuildId};
use crate::domain::loading_phase::{LoadState, LoadingPhase};

/// Notification sent to the view owning the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinatorEvent {
    /// The first successful load moved startup to the given phase.
    PhaseAdvanced(LoadingPhase),
    /// Channels are available and a selection was resolved.
    ChannelsReady {
        guild_id: GuildId,
        selection: Option<ChannelId>,
    },
    /// The guild has no channels to show.
    ChannelsUnavailable { guild_id: GuildId },
}

/// Owns the channel list, the selection and the loading flag of a guild view.
///
/// All state is mutated through `&mut self` by the owning task. Fetches run
/// on the loader; their results come back through [`Self::handle_action`]
/// and are applied only when they answer the latest guild change.
pub struct ChannelListCoordinator {
    guild_id: Option<GuildId>,
    channels: Vec<Channel>,
    selection: Option<ChannelId>,
    is_loading: bool,
    state: LoadState,
    generation: u64,
    phase: LoadingPhase,
    command_tx: mpsc::UnboundedSender<LoaderCommand>,
    event_tx: mpsc::UnboundedSender<CoordinatorEvent>,
}

impl ChannelListCoordinator {
    #[must_use]
    pub fn new(
        command_tx: mpsc::UnboundedSender<LoaderCommand>,
        event_tx: mpsc::UnboundedSender<CoordinatorEvent>,
    ) -> Self {
        Self {
            guild_id: None,
            channels: Vec::new(),
            selection: None,
            is_loading: false,
            state: LoadState::Idle,
            generation: 0,
            phase: LoadingPhase::default(),
            command_tx,
            event_tx,
        }
    }

    /// Switches the view to a guild and starts fetching its channels.
    ///
    /// Returns the ticket of the issued fetch.
    pub fn set_guild(&mut self, guild_id: GuildId) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket::new(guild_id.clone(), self.generation);

        debug!(ticket = %ticket, "Starting channel load");

        self.guild_id = Some(guild_id);
        self.channels.clear();
        self.selection = None;
        self.is_loading = true;
        self.state = LoadState::Loading;

        if self
            .command_tx
            .send(LoaderCommand::FetchChannels {
                ticket: ticket.clone(),
            })
            .is_err()
        {
            warn!(ticket = %ticket, "Channel loader is gone, load cannot finish");
        }

        ticket
    }

    /// Applies a loader result.
    ///
    /// Returns false when the result was stale and discarded.
    pub fn handle_action(&mut self, action: LoaderAction) -> bool {
        if action.ticket().generation != self.generation {
            debug!(
                ticket = %action.ticket(),
                current = self.generation,
                "Discarding stale channel load"
            );
            return false;
        }

        match action {
            LoaderAction::ChannelsLoaded { ticket, fetched } if !fetched.is_empty() => {
                self.apply_loaded(ticket, fetched);
            }
            LoaderAction::ChannelsLoaded { ticket, .. } => {
                self.apply_empty(ticket);
            }
            LoaderAction::ChannelsLoadFailed { ticket, error } => {
                warn!(ticket = %ticket, error = %error, "Channel load failed");
                self.apply_empty(ticket);
            }
        }

        true
    }

    fn apply_loaded(&mut self, ticket: LoadTicket, fetched: FetchedChannels) {
        let FetchedChannels {
            channels,
            remembered,
        } = fetched;

        let unreachable = HierarchyBuilder::unreachable(&channels).len();
        if unreachable > 0 {
            debug!(ticket = %ticket, count = unreachable, "Channels outside any category are hidden");
        }

        self.selection = SelectionResolver::resolve(&channels, remembered.as_ref());
        self.channels = channels;
        self.is_loading = false;
        self.state = LoadState::Loaded;

        info!(
            ticket = %ticket,
            count = self.channels.len(),
            selection = ?self.selection,
            "Channel list loaded"
        );

        if self.phase == LoadingPhase::InitialGuildLoad {
            self.phase = LoadingPhase::ChannelLoad;
            self.emit(CoordinatorEvent::PhaseAdvanced(LoadingPhase::ChannelLoad));
        }

        self.emit(CoordinatorEvent::ChannelsReady {
            guild_id: ticket.guild_id,
            selection: self.selection.clone(),
        });
    }

    fn apply_empty(&mut self, ticket: LoadTicket) {
        self.is_loading = false;
        self.state = LoadState::Empty;

        info!(ticket = %ticket, "No channels available");

        self.emit(CoordinatorEvent::ChannelsUnavailable {
            guild_id: ticket.guild_id,
        });
    }

    /// Records the view's load phase.
    ///
    /// Going back to [`LoadingPhase::InitialGuildLoad`] after a load settled
    /// reloads the current guild from scratch.
    pub fn on_loading_phase_changed(&mut self, phase: LoadingPhase) -> Option<LoadTicket> {
        self.phase = phase;

        if phase != LoadingPhase::InitialGuildLoad || self.is_loading {
            return None;
        }

        let guild_id = self.guild_id.clone()?;
        info!(guild_id = %guild_id, "Reset requested, reloading channels");
        Some(self.set_guild(guild_id))
    }

    /// Marks a channel as opened and remembers it for the guild.
    ///
    /// Returns false when the channel is not in the current list. Such a
    /// channel is still selected and remembered; a later load falls back
    /// if it never shows up.
    pub fn open_channel(&mut self, channel_id: ChannelId) -> bool {
        let Some(guild_id) = self.guild_id.clone() else {
            warn!(channel_id = %channel_id, "Ignoring channel open without a guild");
            return false;
        };

        let known = self.channels.iter().any(|c| c.id() == &channel_id);
        if known {
            debug!(guild_id = %guild_id, channel_id = %channel_id, "Channel opened");
        } else {
            warn!(
                guild_id = %guild_id,
                channel_id = %channel_id,
                state = ?self.state,
                "Opening a channel missing from the current list"
            );
        }

        self.selection = Some(channel_id.clone());
        if self
            .command_tx
            .send(LoaderCommand::RememberChannel {
                guild_id,
                channel_id,
            })
            .is_err()
        {
            warn!("Channel loader is gone, selection not persisted");
        }

        known
    }

    /// Returns the category hierarchy of the current channels.
    #[must_use]
    pub fn hierarchy(&self) -> Vec<CategoryGroup<'_>> {
        HierarchyBuilder::build(&self.channels)
    }

    #[must_use]
    pub fn guild_id(&self) -> Option<&GuildId> {
        self.guild_id.as_ref()
    }

    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    #[must_use]
    pub fn selection(&self) -> Option<&ChannelId> {
        self.selection.as_ref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub const fn phase(&self) -> LoadingPhase {
        self.phase
    }

    fn emit(&self, event: CoordinatorEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("No listener for coordinator events");
        }
    }
}
