pub mod hierarchy_builder;
pub mod last_channel_store;
pub mod selection_resolver;

pub use hierarchy_builder::{CategoryGroup, HierarchyBuilder};
pub use last_channel_store::LastChannelStore;
pub use selection_resolver::SelectionResolver;
