//! Classify curl and transport errors into retry policy error kinds.

use super::error::TransportError;
use super::policy::ErrorKind;

/// Classify a curl error for retry decisions.
///
/// Timeouts and everything not otherwise recognized are candidates for
/// retry; cancellation, name resolution, and TLS failures are hard stops.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_aborted_by_callback() {
        return ErrorKind::Interrupted;
    }
    if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return ErrorKind::UnknownHost;
    }
    if e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_ssl_certproblem()
        || e.is_ssl_cipher()
    {
        return ErrorKind::Tls;
    }
    ErrorKind::Transient
}

/// Classify a transport attempt error into an [`ErrorKind`].
pub fn classify(e: &TransportError) -> ErrorKind {
    match e {
        TransportError::Curl(ce) => classify_curl_error(ce),
        // Form construction fails locally before any bytes are sent; bodied
        // requests are non-idempotent, so the policy stops on them anyway.
        TransportError::Form(_) => ErrorKind::Transient,
    }
}
