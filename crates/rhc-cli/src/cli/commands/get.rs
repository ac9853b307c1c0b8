//! `rhc get <url>` – fetch a URL and print the response.

use anyhow::{bail, Result};
use rhc_core::client::{ClientOptions, HttpClient, Request};
use rhc_core::config::RhcConfig;
use rhc_core::retry::RetryPolicy;

pub fn run_get(cfg: &RhcConfig, url: &str, headers: &[String], insecure: bool, head: bool) -> Result<()> {
    let mut options = ClientOptions::from_config(cfg);
    options.accept_invalid_certs = insecure;
    let policy = cfg
        .retry
        .as_ref()
        .map(RetryPolicy::from_config)
        .unwrap_or_default();
    let client = HttpClient::new(options, policy);

    let mut request = if head {
        Request::head(url)?
    } else {
        Request::get(url)?
    };
    for header in headers {
        let (name, value) = super::parse_header(header)?;
        request = request.header(&name, &value);
    }

    let response = client.execute(&request)?;
    if !response.is_success() {
        bail!("HTTP {}", response.status);
    }
    if head {
        for (name, value) in &response.headers {
            println!("{}: {}", name, value);
        }
    } else {
        print!("{}", response.text());
    }
    Ok(())
}
