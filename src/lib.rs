//! Guildnav - channel list resolution for Discord guild views.
//!
//! This crate fetches a guild's channels, arranges them into a category
//! hierarchy, and resolves which channel a view should open, remembering the
//! user's last choice per guild.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services and the coordinator.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "guildnav";
