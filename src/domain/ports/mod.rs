mod channel_repository_port;
mod selection_store_port;

pub use channel_repository_port::ChannelRepositoryPort;
pub use selection_store_port::SelectionStorePort;

#[cfg(test)]
pub use channel_repository_port::MockChannelRepositoryPort;
