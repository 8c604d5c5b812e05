//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; the teloxide implementation lives in
//! wbot-telegram so the dispatch loop can be driven with a test double.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

/// Abstraction for sending a text message to a chat. Implementations map to a
/// transport (e.g. Telegram); tests substitute a recording double.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
}
