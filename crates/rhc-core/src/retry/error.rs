//! Transport attempt errors and the terminal failure surfaced to callers.

use super::policy::{ErrorKind, StopReason};
use thiserror::Error;

/// Error produced by a single transfer attempt (curl failure or multipart
/// form construction failure). Classified by the retry policy before being
/// surfaced.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Curl reported an error (timeout, connection, TLS, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Building the multipart form failed before any bytes were sent.
    #[error("multipart form: {0}")]
    Form(#[from] curl::FormError),
}

/// Terminal failure: the retry policy declined to retry. Carries the
/// classified kind, the stop reason, and the number of attempts made, along
/// with the last attempt's error as the source.
#[derive(Debug, Error)]
#[error("request failed after {attempts} attempt(s) ({kind}, {reason}): {source}")]
pub struct TerminalError<E: std::error::Error + 'static> {
    /// Classified cause of the final failure.
    pub kind: ErrorKind,
    /// Why retrying stopped.
    pub reason: StopReason,
    /// Total attempts made, including the failing one.
    pub attempts: u32,
    /// The last attempt's error, unwrapped and unmasked.
    #[source]
    pub source: E,
}
