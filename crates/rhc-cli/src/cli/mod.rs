//! CLI for the rhc resilient HTTP client.

mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rhc_core::config;
use std::path::PathBuf;

use commands::{run_form, run_get, run_post, run_redirects, run_upload};

/// Top-level CLI for the rhc HTTP client.
#[derive(Debug, Parser)]
#[command(name = "rhc")]
#[command(about = "rhc: resilient HTTP client with retry and cache-outcome policies", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Perform a GET (or HEAD) request and print the response.
    Get {
        /// HTTP/HTTPS URL to fetch.
        url: String,

        /// Extra request header as "Name: value". Repeatable.
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Accept self-signed or otherwise invalid TLS certificates.
        #[arg(long)]
        insecure: bool,

        /// Send a HEAD request and print the response headers instead.
        #[arg(long)]
        head: bool,
    },

    /// POST a JSON body (validated before sending).
    Post {
        /// HTTP/HTTPS URL to post to.
        url: String,

        /// JSON request body.
        #[arg(long)]
        json: String,
    },

    /// POST an application/x-www-form-urlencoded form.
    Form {
        /// HTTP/HTTPS URL to post to.
        url: String,

        /// Form field as "key=value". Repeatable.
        fields: Vec<String>,
    },

    /// Upload a file as multipart/form-data.
    Upload {
        /// HTTP/HTTPS URL to post to.
        url: String,

        /// Path of the file to upload.
        file: PathBuf,

        /// Form field name for the file part.
        #[arg(long, default_value = "file")]
        name: String,

        /// Extra text part as "key=value". Repeatable.
        #[arg(long = "text")]
        texts: Vec<String>,
    },

    /// Fetch a URL following redirects and print each hop.
    Redirects {
        /// HTTP/HTTPS URL to fetch.
        url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                url,
                headers,
                insecure,
                head,
            } => run_get(&cfg, &url, &headers, insecure, head),
            CliCommand::Post { url, json } => run_post(&cfg, &url, &json),
            CliCommand::Form { url, fields } => run_form(&cfg, &url, &fields),
            CliCommand::Upload {
                url,
                file,
                name,
                texts,
            } => run_upload(&cfg, &url, &file, &name, &texts),
            CliCommand::Redirects { url } => run_redirects(&cfg, &url),
        }
    }
}
