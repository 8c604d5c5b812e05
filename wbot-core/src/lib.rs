//! # wbot-core
//!
//! Core types and traits for the weather bot: [`InboundEvent`] and friends, the [`Bot`]
//! send abstraction, the [`UpdateSource`] contract with its bounded [`UpdateQueue`],
//! error types, and tracing initialization. Transport-agnostic; used by wbot-telegram
//! and the weather-bot binary.

pub mod bot;
pub mod error;
pub mod logger;
pub mod queue;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use queue::{UpdateQueue, UpdateSource, UpdateStream};
pub use types::{Chat, Command, InboundEvent, OutboundReply, User};
