use serde::Deserialize;

use maraline_core::error::{MaralineError, Result};

/// Default request deadline in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Optional YAML config file. Any CLI flag overrides its counterpart here.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorConfig {
    /// Orchestrator base URL, e.g. `http://marathon.internal:8080`.
    #[serde(default)]
    pub url: Option<String>,

    /// HTTP basic auth credentials as `username:password`.
    #[serde(default)]
    pub basic_auth: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            url: None,
            basic_auth: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CollectorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs < 1 {
            return Err(MaralineError::BadConfig(
                "timeout_secs must be at least 1".into(),
            ));
        }
        if let Some(url) = &self.url {
            if url.trim().is_empty() {
                return Err(MaralineError::BadConfig("url must not be empty".into()));
            }
        }
        Ok(())
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
