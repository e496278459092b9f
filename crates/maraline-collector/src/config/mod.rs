//! Collector config loader (strict parsing).

pub mod schema;

use std::fs;

use maraline_core::error::{MaralineError, Result};

pub use schema::CollectorConfig;

pub fn load_from_file(path: &str) -> Result<CollectorConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MaralineError::BadConfig(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<CollectorConfig> {
    let cfg: CollectorConfig = serde_yaml::from_str(s)
        .map_err(|e| MaralineError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
