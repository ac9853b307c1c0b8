//! `rhc redirects <url>` – follow redirects and print each hop.

use anyhow::Result;
use rhc_core::client::{HttpClient, Request};
use rhc_core::config::RhcConfig;

pub fn run_redirects(cfg: &RhcConfig, url: &str) -> Result<()> {
    let client = HttpClient::from_config(cfg);
    let response = client.execute(&Request::get(url)?)?;

    for location in response.locations() {
        println!("via: {}", location);
    }
    if let Some(final_url) = &response.effective_url {
        println!("final: {}", final_url);
    }
    println!("hops: {}", response.redirect_count);
    Ok(())
}
