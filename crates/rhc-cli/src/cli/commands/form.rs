//! `rhc form <url> <key=value>...` – POST a urlencoded form.

use anyhow::{bail, Result};
use rhc_core::client::{HttpClient, Request};
use rhc_core::config::RhcConfig;

pub fn run_form(cfg: &RhcConfig, url: &str, fields: &[String]) -> Result<()> {
    let fields = fields
        .iter()
        .map(|raw| super::parse_field(raw))
        .collect::<Result<Vec<_>>>()?;

    let client = HttpClient::from_config(cfg);
    let request = Request::post(url)?.form(fields);

    let response = client.execute(&request)?;
    if !response.is_success() {
        bail!("HTTP {}", response.status);
    }
    print!("{}", response.text());
    Ok(())
}
