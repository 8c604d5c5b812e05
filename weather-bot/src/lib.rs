//! # weather-bot
//!
//! The bot's routing and dispatch layer: [`CommandRouter`] classifies one
//! inbound event and produces the reply text (delegating lookups to
//! [`wbot_upstream::UpstreamApi`]); [`run_dispatch`] drains an update source
//! sequentially and sends each reply through the platform [`wbot_core::Bot`].

pub mod dispatch;
pub mod format;
pub mod router;

pub use dispatch::run_dispatch;
pub use router::CommandRouter;
