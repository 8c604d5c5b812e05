//! # wbot-upstream
//!
//! Resilient HTTP client for the upstream data services: bounded retries with a
//! fixed backoff, strict status-then-decode validation, and classification of
//! every failure into a [`FetchError`] that renders as user-facing reply text.
//! Also carries the fire-and-forget user-service registration call.

pub mod api;
pub mod client;
pub mod error;
pub mod retry;
pub mod types;

pub use api::{LiveUpstream, UpstreamApi};
pub use client::UpstreamClient;
pub use error::{FetchError, Topic};
pub use retry::{AttemptOutcome, FailureKind, RetryPolicy, RetryState};
pub use types::{Exchange, UserData, Weather};
