//! Server config loader (strict parsing).

pub mod schema;

use std::fs;

use detailhub_core::error::{DashError, Result};

pub use schema::{AuthSection, SeedSection, ServerConfig, ServerSection, TokenEntry};

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| DashError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| DashError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
