//! Push-variant ingestion: webhook endpoint feeding the bounded queue.
//!
//! `POST /bot` takes a JSON array of Telegram updates. Each update is
//! enqueued without blocking; on overflow the update is shed and logged so
//! the platform still gets a fast 200. A malformed body yields 400 and
//! enqueues nothing. `GET /` is the health endpoint. Non-POST on `/bot`
//! gets 405 from axum's method routing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use teloxide::prelude::*;
use teloxide::types::Update;
use tracing::{info, warn};
use wbot_core::UpdateQueue;

use crate::adapters::event_from_update;

/// Pending-event bound for the push variant. Updates beyond this are shed.
pub const UPDATE_QUEUE_CAPACITY: usize = 100;

/// Webhook + health routes over the given queue.
pub fn webhook_router(queue: UpdateQueue) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/bot", post(receive_updates))
        .with_state(queue)
}

/// Binds the listen port and serves the webhook router until the process
/// shuts down.
pub async fn serve_webhook(port: u16, queue: UpdateQueue) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "webhook server listening");
    axum::serve(listener, webhook_router(queue)).await?;
    Ok(())
}

/// Registers this deployment's callback URL with Telegram.
pub async fn register_webhook(bot: &teloxide::Bot, webhook_url: &str) -> anyhow::Result<()> {
    let url = url::Url::parse(webhook_url)
        .map_err(|e| anyhow::anyhow!("invalid WEBHOOK_URL {webhook_url}: {e}"))?;
    bot.set_webhook(url).await?;
    info!(webhook_url, "webhook registered");
    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn receive_updates(State(queue): State<UpdateQueue>, body: String) -> StatusCode {
    let updates: Vec<Update> = match serde_json::from_str(&body) {
        Ok(updates) => updates,
        Err(e) => {
            warn!(error = %e, "malformed webhook payload");
            return StatusCode::BAD_REQUEST;
        }
    };

    for update in &updates {
        let Some(event) = event_from_update(update) else {
            continue;
        };
        if queue.try_push(event).is_err() {
            warn!(update_id = update.id.0, "update queue full, shedding update");
        }
    }
    StatusCode::OK
}
