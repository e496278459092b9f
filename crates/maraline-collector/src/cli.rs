//! Command line surface and settings resolution.

use std::time::Duration;

use clap::Parser;

use maraline_core::error::{MaralineError, Result};

use crate::config::{self, CollectorConfig};

#[derive(Debug, Parser)]
#[command(
    name = "maraline",
    version,
    about = "Polls Marathon's /v2/apps and prints line-protocol metrics"
)]
pub struct Cli {
    /// Marathon base URL, e.g. http://marathon.internal:8080
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// HTTP basic auth credentials as username:password
    #[arg(short = 'a', long = "basic-auth")]
    pub basic_auth: Option<String>,

    /// Timeout for the HTTP request in seconds
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// Optional YAML config file; flags override file values
    #[arg(short = 'c', long)]
    pub config: Option<String>,
}

/// Fully resolved settings for one collection run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub url: String,
    pub basic_auth: Option<String>,
    pub timeout: Duration,
}

impl Cli {
    /// Merge flags over the optional config file; flags win, defaults fill
    /// the rest. The URL is the only value that must come from somewhere.
    pub fn into_settings(self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => config::load_from_file(path)?,
            None => CollectorConfig::default(),
        };

        let url = self.url.or(file.url).ok_or_else(|| {
            MaralineError::BadConfig("marathon URL is required (--url or config file)".into())
        })?;

        let timeout_secs = self.timeout.unwrap_or(file.timeout_secs);
        if timeout_secs < 1 {
            return Err(MaralineError::BadConfig(
                "timeout must be at least 1 second".into(),
            ));
        }

        Ok(Settings {
            url,
            basic_auth: self.basic_auth.or(file.basic_auth),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
