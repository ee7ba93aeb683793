use std::collections::HashMap;

use detailhub_core::identity::{Identity, IdentityProvider};

use crate::config::TokenEntry;

/// Bearer token -> subject id, loaded from config.
pub struct StaticTokenProvider {
    tokens: HashMap<String, String>,
}

impl StaticTokenProvider {
    pub fn new(entries: &[TokenEntry]) -> Self {
        let tokens = entries
            .iter()
            .map(|e| (e.token.clone(), e.subject.clone()))
            .collect();
        Self { tokens }
    }
}

impl IdentityProvider for StaticTokenProvider {
    fn resolve(&self, credential: Option<&str>) -> Option<Identity> {
        let token = credential?;
        match self.tokens.get(token) {
            Some(subject) => Some(Identity::new(subject.clone())),
            None => {
                tracing::debug!("unknown bearer token");
                None
            }
        }
    }
}
