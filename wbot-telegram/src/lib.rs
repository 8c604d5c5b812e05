//! # wbot-telegram
//!
//! Telegram connectivity for the weather bot: the [`wbot_core::Bot`]
//! implementation over teloxide, teloxide→core event adapters, the
//! push-variant webhook receiver (axum) feeding the bounded queue, the
//! pull-variant long-poll source, and env configuration. No routing or
//! upstream logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod poller;
mod webhook;

pub use adapters::{event_from_message, event_from_update, parse_command};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{BotConfig, IngestMode};
pub use poller::TelegramPoller;
pub use webhook::{register_webhook, serve_webhook, webhook_router, UPDATE_QUEUE_CAPACITY};
