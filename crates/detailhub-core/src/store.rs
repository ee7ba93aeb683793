//! Document store contract and the per-request context handed to operations.
//!
//! The store exposes point reads by primary key (or unique index), indexed
//! scans returned newest first, inserts, and single-field patches. Each
//! mutation is atomic per record; there are no cross-record transactions.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{DashError, Result};
use crate::identity::Identity;
use crate::model::{
    Call, CallId, Client, ClientId, Organization, Task, TaskId, TaskStatus, User, UserId,
};

#[async_trait]
pub trait DocumentStore: Send + Sync {
    // users (unique index on subject id)
    async fn user_by_subject(&self, subject_id: &str) -> Result<Option<User>>;
    /// Insert a user. If a user with the same subject already exists, the
    /// existing row wins and its id is returned.
    async fn insert_user(&self, user: User) -> Result<UserId>;
    /// Insert or overwrite the whole user row keyed by subject id, including
    /// its id. Used to load mirrored users at startup.
    async fn put_user(&self, user: User) -> Result<()>;

    // organizations (unique index on external id)
    async fn organization(&self, external_id: &str) -> Result<Option<Organization>>;
    async fn put_organization(&self, org: Organization) -> Result<()>;

    // calls
    async fn call(&self, id: CallId) -> Result<Option<Call>>;
    async fn calls_by_org(&self, org_id: &str) -> Result<Vec<Call>>;
    async fn insert_call(&self, call: Call) -> Result<CallId>;
    async fn patch_call_summary(&self, id: CallId, summary: String) -> Result<()>;

    // clients
    async fn clients_by_org(&self, org_id: &str) -> Result<Vec<Client>>;
    async fn insert_client(&self, client: Client) -> Result<ClientId>;

    // tasks
    async fn task(&self, id: TaskId) -> Result<Option<Task>>;
    async fn tasks_by_call(&self, call_id: CallId) -> Result<Vec<Task>>;
    async fn insert_task(&self, task: Task) -> Result<TaskId>;
    async fn patch_task_status(&self, id: TaskId, status: TaskStatus) -> Result<()>;
}

/// Everything an operation may touch for one request: the caller's identity
/// (if any) and the document store.
#[derive(Clone)]
pub struct RequestCtx {
    identity: Option<Identity>,
    store: Arc<dyn DocumentStore>,
}

impl RequestCtx {
    pub fn new(identity: Option<Identity>, store: Arc<dyn DocumentStore>) -> Self {
        Self { identity, store }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Identity or `Unauthenticated`.
    pub fn require_identity(&self) -> Result<&Identity> {
        self.identity.as_ref().ok_or(DashError::Unauthenticated)
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
