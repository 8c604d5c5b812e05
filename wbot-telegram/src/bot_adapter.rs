//! Wraps teloxide::Bot and implements [`wbot_core::Bot`]. Production code
//! sends replies via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use wbot_core::{Bot as CoreBot, BotError, Chat, Result};

/// Thin wrapper around teloxide::Bot that implements wbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use (e.g. webhook
    /// registration at startup).
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}


#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Send(e.to_string()))?;
        Ok(())
    }
}
