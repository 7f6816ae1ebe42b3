//! Use case implementations.

mod load_channels_use_case;
mod remember_channel_use_case;

pub use load_channels_use_case::LoadChannelsUseCase;
pub use remember_channel_use_case::RememberChannelUseCase;
