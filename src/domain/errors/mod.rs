//! Domain error types.

mod fetch_error;
mod store_error;

pub use fetch_error::ChannelFetchError;
pub use store_error::StoreError;
