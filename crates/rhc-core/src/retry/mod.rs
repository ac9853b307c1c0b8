//! Retry policy for resilient HTTP requests.
//!
//! This module encapsulates error classification (timeouts, caller
//! cancellation, DNS and TLS failures) and the retry decision so that the
//! transport and any embedding application share a consistent policy.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error};
pub use error::{TerminalError, TransportError};
pub use policy::{Attempt, ErrorKind, RetryDecision, RetryPolicy, StopReason};
pub use run::run_with_retry;
