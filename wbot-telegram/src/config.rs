//! Bot configuration from environment variables.
//!
//! Mandatory values abort startup with a descriptive error before anything is
//! served. `WEBHOOK_URL` selects the ingestion mode: present means push
//! (webhook), absent means pull (long-poll).

use anyhow::Result;
use std::env;

const DEFAULT_PORT: u16 = 8080;

/// How inbound updates are received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestMode {
    /// Telegram pushes updates to our webhook endpoint.
    Push { webhook_url: String },
    /// We long-poll Telegram's getUpdates.
    Pull,
}

/// Resolved process configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub weather_api_url: String,
    pub exchange_api_url: String,
    pub user_service_url: Option<String>,
    pub webhook_url: Option<String>,
    pub port: u16,
    pub log_file: Option<String>,
}

impl BotConfig {
    /// Loads from the process environment. `TELEGRAM_BOT_TOKEN`,
    /// `WEATHER_API_URL` and `EXCHANGE_API_URL` are mandatory.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads via an arbitrary lookup (tests pass a map).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            get(key).ok_or_else(|| anyhow::anyhow!("{key} not set"))
        };
        let port = match get("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT is not a valid port number: {raw}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            bot_token: required("TELEGRAM_BOT_TOKEN")?,
            weather_api_url: required("WEATHER_API_URL")?,
            exchange_api_url: required("EXCHANGE_API_URL")?,
            user_service_url: get("USER_SERVICE_URL"),
            webhook_url: get("WEBHOOK_URL"),
            port,
            log_file: get("LOG_FILE"),
        })
    }

    /// Push when a webhook URL is configured, otherwise pull.
    pub fn ingest_mode(&self) -> IngestMode {
        match &self.webhook_url {
            Some(url) => IngestMode::Push {
                webhook_url: url.clone(),
            },
            None => IngestMode::Pull,
        }
    }
}
