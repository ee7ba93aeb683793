//! Shared fixtures for store-backed tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use detailhub_core::identity::Identity;
use detailhub_core::memory::InMemoryStore;
use detailhub_core::model::{Call, CallId, CallStatus, Membership, Role, User, UserId};
use detailhub_core::store::{DocumentStore, RequestCtx};
use detailhub_core::summary::{simulated_summary, SummaryGenerator};
use detailhub_core::Result;

pub async fn store_with_user(subject: &str, orgs: &[(&str, Role)]) -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    add_user(&store, subject, orgs).await;
    store
}

pub async fn add_user(store: &InMemoryStore, subject: &str, orgs: &[(&str, Role)]) {
    let memberships = orgs
        .iter()
        .map(|(org_id, role)| Membership { org_id: org_id.to_string(), role: *role })
        .collect();
    store
        .put_user(User { id: UserId::new(), subject_id: subject.to_string(), memberships })
        .await
        .unwrap();
}

pub async fn add_call(store: &InMemoryStore, org_id: &str, transcript: Option<&str>) -> CallId {
    store
        .insert_call(Call {
            id: CallId::new(),
            org_id: org_id.to_string(),
            client_phone_number: "+15550100".into(),
            status: CallStatus::Completed,
            transcript: transcript.map(str::to_string),
            summary: None,
            structured_data: None,
            created_at: Utc::now(),
        })
        .await
        .unwrap()
}

pub fn ctx_as(subject: &str, store: &Arc<InMemoryStore>) -> RequestCtx {
    RequestCtx::new(Some(Identity::new(subject)), store.clone())
}

pub fn anon(store: &Arc<InMemoryStore>) -> RequestCtx {
    RequestCtx::new(None, store.clone())
}

/// Summarizer with no delay.
pub struct InstantSummarizer;

#[async_trait]
impl SummaryGenerator for InstantSummarizer {
    async fn summarize(&self, call: &Call) -> Result<String> {
        Ok(simulated_summary(&call.client_phone_number))
    }
}
