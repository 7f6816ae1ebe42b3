//! Domain entity definitions.

mod channel;
mod guild;

pub use channel::{Channel, ChannelId, ChannelKind, Position};
pub use guild::{Guild, GuildId};
