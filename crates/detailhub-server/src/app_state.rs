//! Shared application state for the detailhub server.
//!
//! Owns the document store, the identity provider, and the summary generator.
//! Startup seeds the store from config so organizations and memberships are
//! present before the first request.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use detailhub_core::error::Result;
use detailhub_core::identity::IdentityProvider;
use detailhub_core::memory::InMemoryStore;
use detailhub_core::model::{Call, CallId, Membership, Organization, User, UserId};
use detailhub_core::store::{DocumentStore, RequestCtx};
use detailhub_core::summary::SummaryGenerator;

use crate::config::ServerConfig;
use crate::context::StaticTokenProvider;
use crate::services::SimulatedSummarizer;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn DocumentStore>,
    identity: Arc<dyn IdentityProvider>,
    summarizer: Arc<dyn SummaryGenerator>,
}

impl AppState {
    /// Build application state and seed the store.
    pub async fn new(cfg: &ServerConfig) -> Result<Self> {
        let store: Arc<dyn DocumentStore> = Arc::new(InMemoryStore::new());
        let identity: Arc<dyn IdentityProvider> =
            Arc::new(StaticTokenProvider::new(&cfg.auth.tokens));
        let summarizer: Arc<dyn SummaryGenerator> = Arc::new(SimulatedSummarizer::new(Duration::from_millis(
            cfg.server.summary_delay_ms,
        )));

        seed(store.as_ref(), cfg).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner { store, identity, summarizer }),
        })
    }

    pub fn store(&self) -> Arc<dyn DocumentStore> {
        Arc::clone(&self.inner.store)
    }

    pub fn summarizer(&self) -> &dyn SummaryGenerator {
        self.inner.summarizer.as_ref()
    }

    /// Request context for a bearer token (or none).
    pub fn request_ctx(&self, token: Option<&str>) -> RequestCtx {
        RequestCtx::new(self.inner.identity.resolve(token), self.store())
    }
}

async fn seed(store: &dyn DocumentStore, cfg: &ServerConfig) -> Result<()> {
    let known: HashSet<&str> = cfg.seed.organizations.iter().map(|o| o.id.as_str()).collect();

    for o in &cfg.seed.organizations {
        store
            .put_organization(Organization { external_id: o.id.clone(), name: o.name.clone() })
            .await?;
    }

    for u in &cfg.seed.users {
        for m in &u.memberships {
            if !known.contains(m.org.as_str()) {
                tracing::warn!(subject = %u.subject, org = %m.org, "seed membership refers to unseeded organization");
            }
        }
        let memberships = u
            .memberships
            .iter()
            .map(|m| Membership { org_id: m.org.clone(), role: m.role })
            .collect();
        store
            .put_user(User { id: UserId::new(), subject_id: u.subject.clone(), memberships })
            .await?;
    }

    for c in &cfg.seed.calls {
        store
            .insert_call(Call {
                id: CallId::new(),
                org_id: c.org.clone(),
                client_phone_number: c.client_phone_number.clone(),
                status: c.status,
                transcript: c.transcript.clone(),
                summary: c.summary.clone(),
                structured_data: None,
                created_at: Utc::now(),
            })
            .await?;
    }

    tracing::info!(
        organizations = cfg.seed.organizations.len(),
        users = cfg.seed.users.len(),
        calls = cfg.seed.calls.len(),
        "store seeded"
    );
    Ok(())
}
