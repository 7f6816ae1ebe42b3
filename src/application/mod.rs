//! Application layer with use cases, services and the load coordinator.

/// Channel list coordinator.
pub mod coordinator;
/// Data transfer objects.
pub mod dto;
/// Background loader worker.
pub mod loader;
/// Pure channel list services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use coordinator::{ChannelListCoordinator, CoordinatorEvent};
pub use dto::{FetchedChannels, LoadTicket};
pub use loader::{ChannelLoader, LoaderAction, LoaderCommand};
pub use services::{CategoryGroup, HierarchyBuilder, LastChannelStore, SelectionResolver};
pub use use_cases::{LoadChannelsUseCase, RememberChannelUseCase};
