//! Retrying HTTP client.
//!
//! One shared reqwest client with a fixed per-attempt timeout; the retry loop
//! is driven by the state machine in [`crate::retry`]. Query parameters are
//! URL-escaped by reqwest; the caller id travels only in the `X-User-ID`
//! header so upstream can rate-limit per user without parsing the query.

use crate::error::FetchError;
use crate::retry::{advance, AttemptOutcome, RetryPolicy, RetryState};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Header carrying the originating platform user id on every upstream call.
pub const USER_ID_HEADER: &str = "X-User-ID";

/// Shared upstream HTTP client. Construct once and reuse; relies on reqwest's
/// default keep-alive behavior, no pool tuning.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    policy: RetryPolicy,
}

impl UpstreamClient {
    /// Client with the production retry policy (3 attempts, 3 s backoff, 15 s
    /// per-attempt timeout).
    pub fn new() -> anyhow::Result<Self> {
        Self::with_policy(RetryPolicy::default())
    }

    /// Client with an explicit policy; tests shrink the backoff to keep the
    /// retry path fast.
    pub fn with_policy(policy: RetryPolicy) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(policy.attempt_timeout)
            .build()?;
        Ok(Self { http, policy })
    }

    /// GETs `url` with the given query parameters until a 200 response decodes
    /// into `T` or the attempt budget is exhausted. Status is checked strictly
    /// before any decode. Waits `policy.backoff` between failed attempts,
    /// never after the final one.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
        user_id: i64,
    ) -> Result<T, FetchError> {
        let mut state = RetryState::Attempting(1);
        let mut attempt = 1;
        loop {
            let outcome = match self.attempt::<T>(url, params, user_id).await {
                Ok(value) => return Ok(value),
                Err(outcome) => outcome,
            };
            warn!(
                attempt,
                url,
                user_id,
                outcome = ?outcome,
                "upstream attempt failed"
            );

            state = advance(&self.policy, state, &outcome);
            match state {
                RetryState::Attempting(n) => {
                    attempt = n;
                    tokio::time::sleep(self.policy.backoff).await;
                }
                // A failed outcome never advances to Succeeded, so any
                // terminal state here means the budget is spent.
                _ => return Err(self.exhausted(outcome)),
            }
        }
    }

    /// Fire-and-forget JSON POST (user-service registration). Single attempt,
    /// no retry; the caller logs the result.
    pub async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<(), FetchError> {
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| FetchError::Unavailable {
                attempts: 1,
                last_error: e.to_string(),
            })?;
        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::UpstreamStatus(status.as_u16()));
        }
        Ok(())
    }

    /// One attempt: status must be exactly 200 before the body is decoded.
    async fn attempt<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
        user_id: i64,
    ) -> Result<T, AttemptOutcome> {
        let resp = self
            .http
            .get(url)
            .query(params)
            .header(USER_ID_HEADER, user_id.to_string())
            .send()
            .await
            .map_err(|e| AttemptOutcome::Transport(e.to_string()))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(AttemptOutcome::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| AttemptOutcome::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| AttemptOutcome::Decode(e.to_string()))
    }

    /// Classifies an exhausted fetch by its final attempt's outcome.
    fn exhausted(&self, last: AttemptOutcome) -> FetchError {
        match last {
            AttemptOutcome::Transport(e) => FetchError::Unavailable {
                attempts: self.policy.max_attempts,
                last_error: e,
            },
            AttemptOutcome::Status(code) => FetchError::UpstreamStatus(code),
            AttemptOutcome::Decode(e) => FetchError::DecodeFailure(e),
            AttemptOutcome::Success => FetchError::Unavailable {
                attempts: self.policy.max_attempts,
                last_error: "budget exhausted without a failing outcome".to_string(),
            },
        }
    }
}
