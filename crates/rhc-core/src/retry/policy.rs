//! Pure retry decision over attempt budget, hard-stop kinds, and idempotency.

use crate::config::RetryConfig;
use std::fmt;

/// High-level classification of a failed attempt for retry purposes.
///
/// The transport maps raw curl errors into these kinds (see
/// [`classify_curl_error`](super::classify_curl_error)); anything outside the
/// hard-stop set is assumed transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/read).
    Timeout,
    /// Caller-initiated cancellation surfaced by the transport.
    Interrupted,
    /// Host (or proxy) name could not be resolved.
    UnknownHost,
    /// TLS handshake or certificate verification failure.
    Tls,
    /// Any other failure; treated as transient.
    Transient,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Timeout => "timeout",
            ErrorKind::Interrupted => "interrupted",
            ErrorKind::UnknownHost => "unknown host",
            ErrorKind::Tls => "tls failure",
            ErrorKind::Transient => "transient",
        };
        f.write_str(s)
    }
}

/// One failed network attempt, recorded by the transport before consulting
/// the policy. `sequence` is 1-based (1 = first attempt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    /// Position of this attempt in the request's attempt series.
    pub sequence: u32,
    /// Classified cause of the failure.
    pub kind: ErrorKind,
    /// True when re-issuing the request cannot duplicate side effects
    /// (the request carries no body).
    pub idempotent: bool,
}

/// Why the policy declined to retry. Carried on the terminal error for
/// logging; the boolean retry decision itself does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The attempt budget is spent.
    AttemptsExhausted,
    /// Caller-initiated cancellation is never retried.
    Interrupted,
    /// Name resolution failures do not self-heal on retry.
    UnknownHost,
    /// Trust/handshake failures do not self-heal on retry.
    Tls,
    /// Re-submitting a bodied request could duplicate side effects.
    NonIdempotent,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::AttemptsExhausted => "attempt budget exhausted",
            StopReason::Interrupted => "interrupted by caller",
            StopReason::UnknownHost => "unknown host",
            StopReason::Tls => "tls failure",
            StopReason::NonIdempotent => "request is not idempotent",
        };
        f.write_str(s)
    }
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Re-issue the request.
    Retry,
    /// Stop and surface the error, for the given reason.
    Stop(StopReason),
}

/// Retry policy: a pure function of the attempt and a fixed budget.
///
/// Stateless and Copy; safe to share across concurrent in-flight requests.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 5 }
    }
}

impl RetryPolicy {
    pub fn from_config(cfg: &RetryConfig) -> Self {
        Self {
            max_attempts: cfg.max_attempts,
        }
    }

    /// Decide whether a failed attempt should be retried.
    ///
    /// Rules are evaluated in order; the first match wins:
    /// budget, hard-stop error kinds, idempotency, then retry.
    pub fn decide(&self, attempt: &Attempt) -> RetryDecision {
        if attempt.sequence > self.max_attempts {
            return RetryDecision::Stop(StopReason::AttemptsExhausted);
        }
        match attempt.kind {
            ErrorKind::Interrupted => return RetryDecision::Stop(StopReason::Interrupted),
            ErrorKind::UnknownHost => return RetryDecision::Stop(StopReason::UnknownHost),
            ErrorKind::Tls => return RetryDecision::Stop(StopReason::Tls),
            ErrorKind::Timeout | ErrorKind::Transient => {}
        }
        if !attempt.idempotent {
            return RetryDecision::Stop(StopReason::NonIdempotent);
        }
        RetryDecision::Retry
    }

    /// Boolean projection of [`decide`](Self::decide).
    pub fn should_retry(&self, attempt: &Attempt) -> bool {
        matches!(self.decide(attempt), RetryDecision::Retry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [ErrorKind; 5] = [
        ErrorKind::Timeout,
        ErrorKind::Interrupted,
        ErrorKind::UnknownHost,
        ErrorKind::Tls,
        ErrorKind::Transient,
    ];

    fn attempt(sequence: u32, kind: ErrorKind, idempotent: bool) -> Attempt {
        Attempt {
            sequence,
            kind,
            idempotent,
        }
    }

    #[test]
    fn transient_idempotent_within_budget_retries() {
        let p = RetryPolicy { max_attempts: 5 };
        assert!(p.should_retry(&attempt(3, ErrorKind::Transient, true)));
        assert!(p.should_retry(&attempt(1, ErrorKind::Timeout, true)));
    }

    #[test]
    fn budget_exhaustion_stops_every_kind() {
        let p = RetryPolicy { max_attempts: 5 };
        for kind in ALL_KINDS {
            for idempotent in [true, false] {
                assert_eq!(
                    p.decide(&attempt(6, kind, idempotent)),
                    RetryDecision::Stop(StopReason::AttemptsExhausted),
                    "kind={kind:?} idempotent={idempotent}"
                );
            }
        }
    }

    #[test]
    fn budget_rule_wins_over_hard_stops() {
        // Rule order: an out-of-budget TLS failure reports exhaustion,
        // not the TLS stop.
        let p = RetryPolicy { max_attempts: 2 };
        assert_eq!(
            p.decide(&attempt(7, ErrorKind::Tls, true)),
            RetryDecision::Stop(StopReason::AttemptsExhausted)
        );
    }

    #[test]
    fn hard_stop_kinds_never_retry_within_budget() {
        let p = RetryPolicy { max_attempts: 5 };
        for idempotent in [true, false] {
            assert_eq!(
                p.decide(&attempt(2, ErrorKind::Interrupted, idempotent)),
                RetryDecision::Stop(StopReason::Interrupted)
            );
            assert_eq!(
                p.decide(&attempt(2, ErrorKind::UnknownHost, idempotent)),
                RetryDecision::Stop(StopReason::UnknownHost)
            );
            assert_eq!(
                p.decide(&attempt(2, ErrorKind::Tls, idempotent)),
                RetryDecision::Stop(StopReason::Tls)
            );
        }
    }

    #[test]
    fn non_idempotent_never_retries() {
        let p = RetryPolicy { max_attempts: 5 };
        for kind in [ErrorKind::Timeout, ErrorKind::Transient] {
            assert_eq!(
                p.decide(&attempt(1, kind, false)),
                RetryDecision::Stop(StopReason::NonIdempotent)
            );
        }
    }

    #[test]
    fn idempotency_is_necessary_but_not_sufficient() {
        let p = RetryPolicy { max_attempts: 5 };
        for kind in ALL_KINDS {
            for idempotent in [true, false] {
                for sequence in 1..=7 {
                    let retry = p.should_retry(&attempt(sequence, kind, idempotent));
                    let expected = sequence <= 5
                        && idempotent
                        && matches!(kind, ErrorKind::Timeout | ErrorKind::Transient);
                    assert_eq!(retry, expected, "seq={sequence} kind={kind:?} idem={idempotent}");
                }
            }
        }
    }

    #[test]
    fn last_attempt_within_budget_still_retries() {
        // sequence == max_attempts is inside the budget; only > stops.
        let p = RetryPolicy { max_attempts: 5 };
        assert!(p.should_retry(&attempt(5, ErrorKind::Transient, true)));
        assert!(!p.should_retry(&attempt(6, ErrorKind::Transient, true)));
    }

    #[test]
    fn from_config_carries_budget() {
        let cfg = RetryConfig { max_attempts: 2 };
        let p = RetryPolicy::from_config(&cfg);
        assert!(p.should_retry(&attempt(2, ErrorKind::Transient, true)));
        assert!(!p.should_retry(&attempt(3, ErrorKind::Transient, true)));
    }
}
