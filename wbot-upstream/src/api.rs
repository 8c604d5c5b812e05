//! Upstream operations behind a trait so the router can be driven with a
//! test double.

use crate::client::UpstreamClient;
use crate::error::FetchError;
use crate::types::{Exchange, UserData, Weather};
use async_trait::async_trait;
use tracing::{error, info, warn};

/// The three upstream operations the router needs: weather lookup, exchange
/// lookup, and fire-and-forget user registration.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// Weather for a city. `user_id` travels in the `X-User-ID` header.
    async fn weather(&self, city: &str, user_id: i64) -> Result<Weather, FetchError>;
    /// Exchange rate from `base` to `target`.
    async fn exchange(&self, base: &str, target: &str, user_id: i64)
        -> Result<Exchange, FetchError>;
    /// Registers the user with the user service. No retry; failures are
    /// logged here and never surfaced to the reply.
    async fn register_user(&self, user: &UserData);
}

/// Production [`UpstreamApi`] backed by the retrying [`UpstreamClient`] and
/// the configured upstream URLs.
pub struct LiveUpstream {
    client: UpstreamClient,
    weather_url: String,
    exchange_url: String,
    user_service_url: Option<String>,
}

impl LiveUpstream {
    pub fn new(
        client: UpstreamClient,
        weather_url: String,
        exchange_url: String,
        user_service_url: Option<String>,
    ) -> Self {
        Self {
            client,
            weather_url,
            exchange_url,
            user_service_url,
        }
    }
}

#[async_trait]
impl UpstreamApi for LiveUpstream {
    async fn weather(&self, city: &str, user_id: i64) -> Result<Weather, FetchError> {
        self.client
            .fetch_json(&self.weather_url, &[("city", city)], user_id)
            .await
    }

    async fn exchange(
        &self,
        base: &str,
        target: &str,
        user_id: i64,
    ) -> Result<Exchange, FetchError> {
        self.client
            .fetch_json(&self.exchange_url, &[("base", base), ("to", target)], user_id)
            .await
    }

    async fn register_user(&self, user: &UserData) {
        let Some(url) = self.user_service_url.as_deref() else {
            warn!(
                user_id = user.user_id,
                "USER_SERVICE_URL not set, user data not sent"
            );
            return;
        };
        match self.client.post_json(url, user).await {
            Ok(()) => info!(user_id = user.user_id, "user registered"),
            Err(e) => error!(user_id = user.user_id, error = %e, "user registration failed"),
        }
    }
}
