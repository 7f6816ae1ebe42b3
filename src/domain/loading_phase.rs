/// Load phase of the view that owns a channel list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPhase {
    /// Guilds are being loaded for the first time, or everything was reset.
    #[default]
    InitialGuildLoad,
    /// Guilds are known and the first channel list is loading.
    ChannelLoad,
    /// Startup has finished.
    Ready,
}

/// Lifecycle of a single guild's channel list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No guild was requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Channels were fetched and a selection was resolved.
    Loaded,
    /// The fetch failed or returned no channels.
    Empty,
}

impl LoadState {
    /// Returns true once a fetch has resolved one way or the other.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Loaded | Self::Empty)
    }
}
