//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Load phase and load state definitions.
pub mod loading_phase;
/// Port definitions.
pub mod ports;

pub use entities::{Channel, ChannelId, ChannelKind, Guild, GuildId, Position};
pub use errors::{ChannelFetchError, StoreError};
pub use loading_phase::{LoadState, LoadingPhase};
pub use ports::{ChannelRepositoryPort, SelectionStorePort};
