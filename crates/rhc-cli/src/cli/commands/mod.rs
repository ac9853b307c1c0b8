//! Command handlers, one file per subcommand.

mod form;
mod get;
mod post;
mod redirects;
mod upload;

pub use form::run_form;
pub use get::run_get;
pub use post::run_post;
pub use redirects::run_redirects;
pub use upload::run_upload;

use anyhow::{bail, Result};

/// Parse a `-H "Name: value"` argument.
pub(crate) fn parse_header(raw: &str) -> Result<(String, String)> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => bail!("invalid header {:?}, expected \"Name: value\"", raw),
    }
}

/// Parse a `key=value` argument (form fields, text parts).
pub(crate) fn parse_field(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => bail!("invalid field {:?}, expected \"key=value\"", raw),
    }
}
