//! Dispatch loop: the single sequential consumer of the update sequence.
//!
//! One event is routed, fetched and replied-to at a time; that is what lets
//! the router and fetch client stay lock-free. A failed send is logged and
//! the loop keeps consuming; it only returns when the source's sequence ends.

use tracing::{debug, info, warn};
use wbot_core::{Bot, OutboundReply, UpdateSource};
use wbot_upstream::UpstreamApi;

use crate::router::CommandRouter;

/// Drains `source` until its sequence ends. For each non-empty event: build
/// the reply shell, let the router fill it, send it through `bot`.
pub async fn run_dispatch<S, U, B>(mut source: S, router: CommandRouter<U>, bot: B)
where
    S: UpdateSource,
    U: UpstreamApi,
    B: Bot,
{
    info!("dispatch loop started");
    while let Some(event) = source.next_event().await {
        if event.is_empty() {
            debug!(chat_id = event.chat.id, "dropping empty event");
            continue;
        }

        let mut reply = OutboundReply::to_chat(event.chat.id);
        router.route(&event, &mut reply).await;

        if let Err(e) = bot.send_message(&event.chat, &reply.text).await {
            warn!(chat_id = event.chat.id, error = %e, "failed to send reply");
        }
    }
    info!("update sequence ended, dispatch loop exiting");
}
