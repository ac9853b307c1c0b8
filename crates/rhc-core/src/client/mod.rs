//! Blocking HTTP transport over libcurl.
//!
//! Owns all network I/O, TLS negotiation, and redirect following; consults
//! the retry policy on each failed attempt and classifies the cache outcome
//! once a request completes. One curl easy handle is built per attempt so
//! retries start from a clean connection state.

mod request;
mod response;

pub use request::{Body, Method, Part, PartValue, Request};
pub use response::Response;

use crate::cache::{self, CacheSignals};
use crate::config::RhcConfig;
use crate::retry::{classify, run_with_retry, RetryPolicy, TerminalError, TransportError};
use curl::easy::{Easy, Form, List};
use std::str;
use std::time::Duration;
use thiserror::Error;

/// Error returned by [`HttpClient::execute`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    /// The retry policy gave up; carries kind, stop reason, and attempt count.
    #[error(transparent)]
    Failed(#[from] TerminalError<TransportError>),
}

/// Transport options, normally derived from [`RhcConfig`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// Whole-transfer timeout.
    pub timeout: Duration,
    /// Redirect-following cap.
    pub max_redirects: u32,
    pub user_agent: String,
    /// Disable peer and host certificate verification (self-signed servers).
    pub accept_invalid_certs: bool,
    /// Headers applied to every request before per-request headers.
    pub default_headers: Vec<(String, String)>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            user_agent: "rhc/0.1".to_string(),
            accept_invalid_certs: false,
            default_headers: Vec::new(),
        }
    }
}

impl ClientOptions {
    pub fn from_config(cfg: &RhcConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.request_timeout_secs),
            max_redirects: cfg.max_redirects,
            user_agent: cfg.user_agent.clone(),
            accept_invalid_certs: false,
            default_headers: cfg
                .default_headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

/// HTTP client: curl transport plus retry policy.
pub struct HttpClient {
    options: ClientOptions,
    policy: RetryPolicy,
}

impl HttpClient {
    pub fn new(options: ClientOptions, policy: RetryPolicy) -> Self {
        Self { options, policy }
    }

    pub fn from_config(cfg: &RhcConfig) -> Self {
        let policy = cfg
            .retry
            .as_ref()
            .map(RetryPolicy::from_config)
            .unwrap_or_default();
        Self::new(ClientOptions::from_config(cfg), policy)
    }

    /// Execute a request, retrying failed attempts per the retry policy.
    ///
    /// A completed exchange with a non-2xx status is a [`Response`], not a
    /// failure; only transport-level errors reach the policy.
    pub fn execute(&self, req: &Request) -> Result<Response, ClientError> {
        tracing::debug!(method = %req.method, url = %req.url, "executing request");
        let resp = run_with_retry(&self.policy, req.is_idempotent(), classify, || {
            self.perform(req)
        })?;
        // No caching layer sits in front of this transport, so every
        // completed exchange is an origin fetch from the cache's viewpoint.
        // A caching transport would fill in CacheSignals from its storage.
        let outcome = cache::classify(CacheSignals::default());
        tracing::debug!(status = resp.status, cache = %outcome, "request completed");
        Ok(resp)
    }

    /// One transfer attempt on a fresh easy handle.
    fn perform(&self, req: &Request) -> Result<Response, TransportError> {
        let mut easy = Easy::new();
        easy.url(req.url.as_str())?;
        match req.method {
            Method::Get => easy.get(true)?,
            Method::Head => easy.nobody(true)?,
            Method::Post => easy.post(true)?,
            m => easy.custom_request(m.as_str())?,
        }
        easy.follow_location(true)?;
        easy.max_redirections(self.options.max_redirects)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;
        easy.useragent(&self.options.user_agent)?;
        if self.options.accept_invalid_certs {
            easy.ssl_verify_peer(false)?;
            easy.ssl_verify_host(false)?;
        }

        let mut list = List::new();
        let mut has_headers = false;
        for (name, value) in self
            .options
            .default_headers
            .iter()
            .chain(req.headers.iter())
        {
            list.append(&format!("{}: {}", name.trim(), value.trim()))?;
            has_headers = true;
        }

        match &req.body {
            Some(Body::Bytes { content_type, data }) => {
                list.append(&format!("Content-Type: {}", content_type))?;
                has_headers = true;
                easy.post_fields_copy(data)?;
            }
            Some(Body::Form(fields)) => {
                let mut encoder = url::form_urlencoded::Serializer::new(String::new());
                for (name, value) in fields {
                    encoder.append_pair(name, value);
                }
                // libcurl sets application/x-www-form-urlencoded for us.
                easy.post_fields_copy(encoder.finish().as_bytes())?;
            }
            Some(Body::Multipart(parts)) => {
                let mut form = Form::new();
                for part in parts {
                    match &part.value {
                        PartValue::Text(text) => {
                            form.part(&part.name).contents(text.as_bytes()).add()?
                        }
                        PartValue::File(path) => form.part(&part.name).file(path).add()?,
                    }
                }
                easy.httppost(form)?;
            }
            None => {}
        }
        if has_headers {
            easy.http_headers(list)?;
        }

        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let effective_url = easy.effective_url()?.map(|s| s.to_string());
        let redirect_count = easy.redirect_count()?;

        Ok(Response {
            status,
            headers: response::parse_header_lines(&header_lines),
            body,
            effective_url,
            redirect_count,
        })
    }
}
