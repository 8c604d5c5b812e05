//! Pull-variant ingestion: long-polls Telegram's getUpdates.
//!
//! The platform call itself blocks until data or the 60 s timeout, so no
//! local buffering beyond the just-fetched batch is needed. Transient poll
//! errors are logged and retried after a short pause; the sequence never
//! ends on its own.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use teloxide::payloads::GetUpdatesSetters;
use teloxide::prelude::*;
use tracing::warn;
use wbot_core::{InboundEvent, UpdateSource};

use crate::adapters::event_from_update;

const POLL_TIMEOUT_SECS: u32 = 60;
const POLL_RETRY_PAUSE: Duration = Duration::from_secs(2);

/// [`UpdateSource`] that long-polls Telegram, yielding one event at a time
/// and confirming consumed updates via the offset.
pub struct TelegramPoller {
    bot: teloxide::Bot,
    offset: Option<i32>,
    pending: VecDeque<InboundEvent>,
}

impl TelegramPoller {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self {
            bot,
            offset: None,
            pending: VecDeque::new(),
        }
    }
}

/// Next getUpdates offset after confirming `update_id`: one past the highest
/// id seen so far. Ids beyond `i32::MAX` saturate instead of wrapping the
/// offset backwards.
fn confirmed_offset(current: Option<i32>, update_id: u32) -> i32 {
    let next = i32::try_from(update_id)
        .map(|id| id.saturating_add(1))
        .unwrap_or(i32::MAX);
    current.map_or(next, |offset| offset.max(next))
}

#[async_trait]
impl UpdateSource for TelegramPoller {
    async fn next_event(&mut self) -> Option<InboundEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }

            let request = match self.offset {
                Some(offset) => self
                    .bot
                    .get_updates()
                    .timeout(POLL_TIMEOUT_SECS)
                    .offset(offset),
                None => self.bot.get_updates().timeout(POLL_TIMEOUT_SECS),
            };

            match request.await {
                Ok(updates) => {
                    for update in &updates {
                        self.offset = Some(confirmed_offset(self.offset, update.id.0));
                        if let Some(event) = event_from_update(update) {
                            self.pending.push_back(event);
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, "getUpdates failed, retrying");
                    tokio::time::sleep(POLL_RETRY_PAUSE).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_confirmation_is_one_past_the_update_id() {
        assert_eq!(confirmed_offset(None, 0), 1);
        assert_eq!(confirmed_offset(None, 41), 42);
    }

    #[test]
    fn test_offset_never_moves_backwards() {
        assert_eq!(confirmed_offset(Some(100), 41), 100);
        assert_eq!(confirmed_offset(Some(100), 200), 201);
    }

    #[test]
    fn test_oversized_update_id_saturates_instead_of_wrapping() {
        assert_eq!(confirmed_offset(None, u32::MAX), i32::MAX);
        assert_eq!(confirmed_offset(None, i32::MAX as u32), i32::MAX);
        assert_eq!(confirmed_offset(Some(100), u32::MAX), i32::MAX);
    }
}
