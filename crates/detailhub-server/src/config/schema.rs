use std::collections::HashSet;

use serde::Deserialize;

use detailhub_core::error::{DashError, Result};
use detailhub_core::model::{CallStatus, Role};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    pub auth: AuthSection,

    #[serde(default)]
    pub seed: SeedSection,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DashError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.server.validate()?;
        self.auth.validate()?;
        self.seed.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Simulated latency of the summary generator.
    #[serde(default = "default_summary_delay_ms")]
    pub summary_delay_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            summary_delay_ms: default_summary_delay_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.summary_delay_ms > 30000 {
            return Err(DashError::BadRequest(
                "server.summary_delay_ms must be between 0 and 30000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_summary_delay_ms() -> u64 {
    2000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    pub tokens: Vec<TokenEntry>,
}

/// Static bearer token standing in for the hosted identity provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenEntry {
    pub token: String,
    pub subject: String,
}

impl AuthSection {
    pub fn validate(&self) -> Result<()> {
        if self.tokens.is_empty() {
            return Err(DashError::BadRequest("auth.tokens must not be empty".into()));
        }
        let mut seen = HashSet::new();
        for t in &self.tokens {
            if t.token.is_empty() || t.subject.is_empty() {
                return Err(DashError::BadRequest(
                    "auth.tokens entries need a non-empty token and subject".into(),
                ));
            }
            if !seen.insert(t.token.as_str()) {
                return Err(DashError::BadRequest(format!(
                    "auth.tokens has a duplicate token for subject {}",
                    t.subject
                )));
            }
        }
        Ok(())
    }
}

/// Records loaded into the store at startup. Organizations and memberships
/// mirror the identity provider; calls stand in for the call processor.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedSection {
    #[serde(default)]
    pub organizations: Vec<SeedOrganization>,
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub calls: Vec<SeedCall>,
}

impl SeedSection {
    pub fn validate(&self) -> Result<()> {
        let mut subjects = HashSet::new();
        for u in &self.users {
            if u.subject.is_empty() {
                return Err(DashError::BadRequest("seed.users[].subject must not be empty".into()));
            }
            if !subjects.insert(u.subject.as_str()) {
                return Err(DashError::BadRequest(format!(
                    "seed.users has duplicate subject: {}",
                    u.subject
                )));
            }
        }
        if self.calls.iter().any(|c| c.org.is_empty()) {
            return Err(DashError::BadRequest("seed.calls[].org must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedOrganization {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedUser {
    pub subject: String,
    #[serde(default)]
    pub memberships: Vec<SeedMembership>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedMembership {
    pub org: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedCall {
    pub org: String,
    pub client_phone_number: String,
    pub status: CallStatus,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}
