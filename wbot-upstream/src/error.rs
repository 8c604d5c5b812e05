//! Classified fetch failures and their user-facing renderings.
//!
//! Every upstream/network failure is recovered at this boundary and turned
//! into reply text; raw errors never reach the dispatch loop.

use thiserror::Error;

/// Outcome of an exhausted fetch, classified by the final attempt's failure.
#[derive(Error, Debug)]
pub enum FetchError {
    /// No usable response at the transport level after all attempts.
    #[error("upstream unreachable after {attempts} attempts: {last_error}")]
    Unavailable { attempts: u32, last_error: String },

    /// Upstream was reachable but the final attempt returned a non-200 status.
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    /// Upstream returned 200 but the body did not decode into the expected payload.
    #[error("could not decode upstream response: {0}")]
    DecodeFailure(String),
}

/// Which upstream the failed fetch was for; selects the reply wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Weather,
    Exchange,
}

impl FetchError {
    /// Reply text shown to the user for this failure.
    pub fn user_text(&self, topic: Topic) -> String {
        match (self, topic) {
            (FetchError::Unavailable { .. }, Topic::Weather) => {
                "Weather is still loading. Please try again in a few seconds.".to_string()
            }
            (FetchError::Unavailable { .. }, Topic::Exchange) => {
                "Exchange rates are temporarily unavailable. Please try again later.".to_string()
            }
            (FetchError::UpstreamStatus(code), _) => {
                format!("The service returned an error: {code}")
            }
            (FetchError::DecodeFailure(_), Topic::Weather) => {
                "Could not process the weather data.".to_string()
            }
            (FetchError::DecodeFailure(_), Topic::Exchange) => {
                "Could not process the exchange rate data.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_is_surfaced_in_reply() {
        let err = FetchError::UpstreamStatus(503);
        assert!(err.user_text(Topic::Weather).contains("503"));
        assert!(err.user_text(Topic::Exchange).contains("503"));
    }

    #[test]
    fn test_unavailable_wording_differs_by_topic() {
        let err = FetchError::Unavailable {
            attempts: 3,
            last_error: "connection refused".to_string(),
        };
        assert_ne!(err.user_text(Topic::Weather), err.user_text(Topic::Exchange));
    }

    #[test]
    fn test_decode_failure_never_leaks_raw_error() {
        let err = FetchError::DecodeFailure("expected value at line 1".to_string());
        assert!(!err.user_text(Topic::Weather).contains("line 1"));
    }
}
