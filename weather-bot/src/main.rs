//! Binary entry point: load .env, resolve config (fatal if a mandatory value
//! is missing), init tracing, then run the dispatch loop over the configured
//! update source (webhook push or long-poll pull).

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use wbot_core::{init_tracing, UpdateQueue};
use wbot_telegram::{
    register_webhook, serve_webhook, BotConfig, IngestMode, TelegramBotAdapter, TelegramPoller,
    UPDATE_QUEUE_CAPACITY,
};
use wbot_upstream::{LiveUpstream, UpstreamClient};
use weather_bot::{run_dispatch, CommandRouter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = BotConfig::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    let bot = teloxide::Bot::new(config.bot_token.clone());
    let upstream = Arc::new(LiveUpstream::new(
        UpstreamClient::new()?,
        config.weather_api_url.clone(),
        config.exchange_api_url.clone(),
        config.user_service_url.clone(),
    ));
    let router = CommandRouter::new(upstream);
    let sender = TelegramBotAdapter::new(bot.clone());

    match config.ingest_mode() {
        IngestMode::Push { webhook_url } => {
            register_webhook(sender.inner(), &webhook_url).await?;
            let (queue, stream) = UpdateQueue::bounded(UPDATE_QUEUE_CAPACITY);
            let port = config.port;
            tokio::spawn(async move {
                if let Err(e) = serve_webhook(port, queue).await {
                    error!(error = %e, "webhook server failed");
                }
            });
            info!(port, "bot started in push mode, waiting for updates");
            run_dispatch(stream, router, sender).await;
        }
        IngestMode::Pull => {
            info!("bot started in pull mode, long-polling for updates");
            run_dispatch(TelegramPoller::new(bot), router, sender).await;
        }
    }

    Ok(())
}
