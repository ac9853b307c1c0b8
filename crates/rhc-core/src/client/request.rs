//! Request model: method, headers, body variants, idempotency.

use super::ClientError;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of one multipart form part.
#[derive(Debug, Clone)]
pub enum PartValue {
    /// Inline text content.
    Text(String),
    /// File to read and upload.
    File(PathBuf),
}

/// One part of a multipart/form-data body.
#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub value: PartValue,
}

/// Request body variants.
#[derive(Debug, Clone)]
pub enum Body {
    /// Raw bytes with an explicit content type (e.g. a JSON document).
    Bytes {
        content_type: String,
        data: Vec<u8>,
    },
    /// application/x-www-form-urlencoded key/value pairs.
    Form(Vec<(String, String)>),
    /// multipart/form-data parts, encoded by curl's form API.
    Multipart(Vec<Part>),
}

/// An HTTP request to be executed by [`HttpClient`](super::HttpClient).
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
}

impl Request {
    /// Build a request after validating the URL (http/https only).
    pub fn new(method: Method, url: &str) -> Result<Self, ClientError> {
        let url = Url::parse(url)?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(ClientError::UnsupportedScheme(other.to_string())),
        }
        Ok(Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn get(url: &str) -> Result<Self, ClientError> {
        Self::new(Method::Get, url)
    }

    pub fn head(url: &str) -> Result<Self, ClientError> {
        Self::new(Method::Head, url)
    }

    pub fn post(url: &str) -> Result<Self, ClientError> {
        Self::new(Method::Post, url)
    }

    /// Append a request header.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Set a raw body with an explicit content type.
    pub fn bytes(mut self, content_type: &str, data: Vec<u8>) -> Self {
        self.body = Some(Body::Bytes {
            content_type: content_type.to_string(),
            data,
        });
        self
    }

    /// Set a JSON body.
    pub fn json(self, data: Vec<u8>) -> Self {
        self.bytes("application/json", data)
    }

    /// Set a urlencoded form body.
    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = Some(Body::Form(fields));
        self
    }

    /// Set a multipart/form-data body.
    pub fn multipart(mut self, parts: Vec<Part>) -> Self {
        self.body = Some(Body::Multipart(parts));
        self
    }

    /// A request carrying a body is not idempotent: re-submitting it could
    /// duplicate side effects, so the retry policy never re-issues it.
    /// Body-less GET/HEAD/DELETE are idempotent.
    pub fn is_idempotent(&self) -> bool {
        self.body.is_none()
    }
}
