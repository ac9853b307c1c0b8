//! Retry loop: run an attempt closure until success or the policy says stop.

use super::error::TerminalError;
use super::policy::{Attempt, ErrorKind, RetryDecision, RetryPolicy};

/// Runs `f` until it succeeds or the retry policy says to stop.
///
/// One [`Attempt`] is built per failure from the injected classifier and the
/// request's idempotency; on a `Stop` decision the terminal error carries the
/// classified kind, the stop reason, and the attempts made. Retries are
/// immediate; the policy's budget is the only brake.
pub fn run_with_retry<T, E, C, F>(
    policy: &RetryPolicy,
    idempotent: bool,
    classify: C,
    mut f: F,
) -> Result<T, TerminalError<E>>
where
    E: std::error::Error + 'static,
    C: Fn(&E) -> ErrorKind,
    F: FnMut() -> Result<T, E>,
{
    let mut sequence = 1u32;
    loop {
        match f() {
            Ok(value) => return Ok(value),
            Err(e) => {
                let attempt = Attempt {
                    sequence,
                    kind: classify(&e),
                    idempotent,
                };
                match policy.decide(&attempt) {
                    RetryDecision::Retry => {
                        tracing::warn!(
                            attempt = sequence,
                            kind = %attempt.kind,
                            error = %e,
                            "attempt failed, retrying"
                        );
                        sequence += 1;
                    }
                    RetryDecision::Stop(reason) => {
                        return Err(TerminalError {
                            kind: attempt.kind,
                            reason,
                            attempts: sequence,
                            source: e,
                        });
                    }
                }
            }
        }
    }
}
