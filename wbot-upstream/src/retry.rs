//! Pure retry state machine driving the fetch loop.
//!
//! The loop in [`crate::client`] performs one attempt per `Attempting(n)`
//! state and feeds the outcome through [`advance`]; the transition function
//! itself does no I/O, so the attempt/backoff accounting is testable without
//! a network.

use std::time::Duration;

/// Attempt budget and timing. The defaults match the production contract:
/// 3 attempts, 15 s per attempt, fixed 3 s backoff between failed attempts.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(3),
            attempt_timeout: Duration::from_secs(15),
        }
    }
}

/// How a single attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// 200 and the body decoded.
    Success,
    /// No usable response (connect error, timeout, body read error).
    Transport(String),
    /// A response arrived with a status other than 200.
    Status(u16),
    /// 200 but the body did not decode.
    Decode(String),
}

/// Failure classification carried into the terminal state. Derived from the
/// final attempt's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Unavailable,
    UpstreamStatus(u16),
    DecodeFailure,
}

/// State of one fetch. `Attempting(n)` means attempt `n` (1-based) is the
/// next/current one; `Succeeded` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    Attempting(u32),
    Succeeded,
    Failed(FailureKind),
}

/// Transition after attempt `n` finished with `outcome`. A failed attempt
/// moves to `Attempting(n + 1)` while budget remains, otherwise to `Failed`
/// with the kind of the final outcome. Terminal states absorb.
pub fn advance(policy: &RetryPolicy, state: RetryState, outcome: &AttemptOutcome) -> RetryState {
    let n = match state {
        RetryState::Attempting(n) => n,
        terminal => return terminal,
    };
    match outcome {
        AttemptOutcome::Success => RetryState::Succeeded,
        _ if n < policy.max_attempts => RetryState::Attempting(n + 1),
        AttemptOutcome::Transport(_) => RetryState::Failed(FailureKind::Unavailable),
        AttemptOutcome::Status(code) => RetryState::Failed(FailureKind::UpstreamStatus(*code)),
        AttemptOutcome::Decode(_) => RetryState::Failed(FailureKind::DecodeFailure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RetryPolicy {
        RetryPolicy::default()
    }

    fn transport() -> AttemptOutcome {
        AttemptOutcome::Transport("connection refused".to_string())
    }

    /// Drives the machine over a scripted sequence of outcomes, counting how
    /// many backoff waits the client loop would insert (one per transition
    /// back into `Attempting`).
    fn drive(outcomes: &[AttemptOutcome]) -> (RetryState, u32) {
        let policy = policy();
        let mut state = RetryState::Attempting(1);
        let mut delays = 0;
        for outcome in outcomes {
            state = advance(&policy, state, outcome);
            if matches!(state, RetryState::Attempting(_)) {
                delays += 1;
            }
        }
        (state, delays)
    }

    #[test]
    fn test_fail_fail_succeed_takes_three_attempts_and_two_delays() {
        let (state, delays) = drive(&[transport(), transport(), AttemptOutcome::Success]);
        assert_eq!(state, RetryState::Succeeded);
        assert_eq!(delays, 2);
    }

    #[test]
    fn test_never_succeeding_fails_unavailable_with_two_delays() {
        let (state, delays) = drive(&[transport(), transport(), transport()]);
        assert_eq!(state, RetryState::Failed(FailureKind::Unavailable));
        // No delay after the final attempt.
        assert_eq!(delays, 2);
    }

    #[test]
    fn test_classification_follows_the_final_attempt() {
        let (state, _) = drive(&[transport(), AttemptOutcome::Status(502), transport()]);
        assert_eq!(state, RetryState::Failed(FailureKind::Unavailable));

        let (state, _) = drive(&[transport(), transport(), AttemptOutcome::Status(502)]);
        assert_eq!(state, RetryState::Failed(FailureKind::UpstreamStatus(502)));

        let (state, _) = drive(&[
            AttemptOutcome::Status(500),
            transport(),
            AttemptOutcome::Decode("bad json".to_string()),
        ]);
        assert_eq!(state, RetryState::Failed(FailureKind::DecodeFailure));
    }

    #[test]
    fn test_success_on_first_attempt_needs_no_delay() {
        let (state, delays) = drive(&[AttemptOutcome::Success]);
        assert_eq!(state, RetryState::Succeeded);
        assert_eq!(delays, 0);
    }

    #[test]
    fn test_terminal_states_absorb() {
        let policy = policy();
        assert_eq!(
            advance(&policy, RetryState::Succeeded, &transport()),
            RetryState::Succeeded
        );
        let failed = RetryState::Failed(FailureKind::Unavailable);
        assert_eq!(advance(&policy, failed, &AttemptOutcome::Success), failed);
    }

    #[test]
    fn test_attempt_counter_is_one_based_and_capped() {
        let policy = policy();
        let s1 = advance(&policy, RetryState::Attempting(1), &transport());
        assert_eq!(s1, RetryState::Attempting(2));
        let s2 = advance(&policy, s1, &transport());
        assert_eq!(s2, RetryState::Attempting(3));
        let s3 = advance(&policy, s2, &transport());
        assert_eq!(s3, RetryState::Failed(FailureKind::Unavailable));
    }
}
