//! `rhc post <url> --json <body>` – POST a JSON body.

use anyhow::{bail, Context, Result};
use rhc_core::client::{HttpClient, Request};
use rhc_core::config::RhcConfig;

pub fn run_post(cfg: &RhcConfig, url: &str, json: &str) -> Result<()> {
    // Validate the body is well-formed JSON before putting it on the wire.
    let value: serde_json::Value =
        serde_json::from_str(json).context("request body is not valid JSON")?;
    let body = serde_json::to_vec(&value)?;

    let client = HttpClient::from_config(cfg);
    let request = Request::post(url)?.json(body);

    let response = client.execute(&request)?;
    if !response.is_success() {
        bail!("HTTP {}", response.status);
    }
    print!("{}", response.text());
    Ok(())
}
