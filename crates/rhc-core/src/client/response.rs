//! Response model and header-line parsing.

use std::borrow::Cow;

/// A completed HTTP exchange.
///
/// When redirects were followed, `headers` contains the header pairs of
/// every hop in order, so intermediate `Location` values remain visible.
#[derive(Debug, Clone)]
pub struct Response {
    /// Final HTTP status code.
    pub status: u32,
    /// Header name/value pairs across all hops.
    pub headers: Vec<(String, String)>,
    /// Response body bytes.
    pub body: Vec<u8>,
    /// URL the transfer actually ended at, after redirects.
    pub effective_url: Option<String>,
    /// Number of redirects followed.
    pub redirect_count: u32,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header with the given name, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Intermediate redirect targets (`Location` headers), in hop order.
    pub fn locations(&self) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case("location"))
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

/// Parse raw header lines from curl's header callback into name/value pairs.
/// Status lines and blank separators are skipped.
pub(crate) fn parse_header_lines(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with("HTTP/") {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }
    headers
}
