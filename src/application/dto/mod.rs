//! Data transfer objects for the application layer.

mod channels_dto;

pub use channels_dto::{FetchedChannels, LoadTicket};
