//! `rhc upload <url> <file>` – multipart/form-data file upload.

use anyhow::{bail, ensure, Result};
use rhc_core::client::{HttpClient, Part, PartValue, Request};
use rhc_core::config::RhcConfig;
use std::path::Path;

pub fn run_upload(
    cfg: &RhcConfig,
    url: &str,
    file: &Path,
    name: &str,
    texts: &[String],
) -> Result<()> {
    ensure!(file.is_file(), "not a file: {}", file.display());

    let mut parts = vec![Part {
        name: name.to_string(),
        value: PartValue::File(file.to_path_buf()),
    }];
    for raw in texts {
        let (key, value) = super::parse_field(raw)?;
        parts.push(Part {
            name: key,
            value: PartValue::Text(value),
        });
    }

    let client = HttpClient::from_config(cfg);
    let request = Request::post(url)?.multipart(parts);

    let response = client.execute(&request)?;
    if !response.is_success() {
        bail!("HTTP {}", response.status);
    }
    print!("{}", response.text());
    Ok(())
}
