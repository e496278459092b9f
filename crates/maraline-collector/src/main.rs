//! maraline collector binary.
//!
//! One process run = one fetch-decode-encode cycle:
//! - GET `{url}/v2/apps` under a hard deadline
//! - decode the JSON app list (malformed input degrades to zero apps)
//! - print line protocol on stdout
//!
//! Diagnostics go to stderr so stdout stays clean for the metrics blob; the
//! process exits normally even when zero lines are produced.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use maraline_collector::{cli::Cli, pipeline};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = match Cli::parse().into_settings() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    tracing::debug!(
        url = %settings.url,
        timeout_secs = settings.timeout.as_secs(),
        "collection starting"
    );

    println!("{}", pipeline::collect(&settings).await);
}
