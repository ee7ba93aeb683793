//! In-memory document store.
//!
//! Backed by `DashMap` tables. Every insert takes a monotonically increasing
//! sequence number, which indexed scans use to return rows newest first.
//! Patches go through `get_mut`, so each one holds the row's shard lock for
//! the duration of the write.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{DashError, Result};
use crate::model::{
    Call, CallId, Client, ClientId, Organization, Task, TaskId, TaskStatus, User, UserId,
};
use crate::store::DocumentStore;

#[derive(Debug, Clone)]
struct Row<T> {
    seq: u64,
    doc: T,
}

#[derive(Default)]
pub struct InMemoryStore {
    users: DashMap<String, User>,
    organizations: DashMap<String, Organization>,
    calls: DashMap<CallId, Row<Call>>,
    clients: DashMap<ClientId, Row<Client>>,
    tasks: DashMap<TaskId, Row<Task>>,
    seq: AtomicU64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            seq: AtomicU64::new(1),
            ..Default::default()
        }
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }

    /// Number of stored tasks (all organizations).
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

/// Collect matching rows, newest insertion first.
fn scan_desc<K, T, F>(table: &DashMap<K, Row<T>>, pred: F) -> Vec<T>
where
    K: Eq + std::hash::Hash,
    T: Clone,
    F: Fn(&T) -> bool,
{
    let mut rows: Vec<Row<T>> = table
        .iter()
        .filter(|r| pred(&r.value().doc))
        .map(|r| r.value().clone())
        .collect();
    rows.sort_by(|a, b| b.seq.cmp(&a.seq));
    rows.into_iter().map(|r| r.doc).collect()
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn user_by_subject(&self, subject_id: &str) -> Result<Option<User>> {
        Ok(self.users.get(subject_id).map(|u| u.value().clone()))
    }

    async fn insert_user(&self, user: User) -> Result<UserId> {
        match self.users.entry(user.subject_id.clone()) {
            Entry::Occupied(e) => Ok(e.get().id),
            Entry::Vacant(e) => {
                let id = user.id;
                e.insert(user);
                Ok(id)
            }
        }
    }

    async fn put_user(&self, user: User) -> Result<()> {
        self.users.insert(user.subject_id.clone(), user);
        Ok(())
    }

    async fn organization(&self, external_id: &str) -> Result<Option<Organization>> {
        Ok(self.organizations.get(external_id).map(|o| o.value().clone()))
    }

    async fn put_organization(&self, org: Organization) -> Result<()> {
        self.organizations.insert(org.external_id.clone(), org);
        Ok(())
    }

    async fn call(&self, id: CallId) -> Result<Option<Call>> {
        Ok(self.calls.get(&id).map(|r| r.value().doc.clone()))
    }

    async fn calls_by_org(&self, org_id: &str) -> Result<Vec<Call>> {
        Ok(scan_desc(&self.calls, |c| c.org_id == org_id))
    }

    async fn insert_call(&self, call: Call) -> Result<CallId> {
        let id = call.id;
        let seq = self.next_seq();
        self.calls.insert(id, Row { seq, doc: call });
        Ok(id)
    }

    async fn patch_call_summary(&self, id: CallId, summary: String) -> Result<()> {
        let mut row = self
            .calls
            .get_mut(&id)
            .ok_or_else(|| DashError::NotFound(format!("call {id}")))?;
        row.doc.summary = Some(summary);
        Ok(())
    }

    async fn clients_by_org(&self, org_id: &str) -> Result<Vec<Client>> {
        Ok(scan_desc(&self.clients, |c| c.org_id == org_id))
    }

    async fn insert_client(&self, client: Client) -> Result<ClientId> {
        let id = client.id;
        let seq = self.next_seq();
        self.clients.insert(id, Row { seq, doc: client });
        Ok(id)
    }

    async fn task(&self, id: TaskId) -> Result<Option<Task>> {
        Ok(self.tasks.get(&id).map(|r| r.value().doc.clone()))
    }

    async fn tasks_by_call(&self, call_id: CallId) -> Result<Vec<Task>> {
        Ok(scan_desc(&self.tasks, |t| t.call_id == call_id))
    }

    async fn insert_task(&self, task: Task) -> Result<TaskId> {
        let id = task.id;
        let seq = self.next_seq();
        self.tasks.insert(id, Row { seq, doc: task });
        Ok(id)
    }

    async fn patch_task_status(&self, id: TaskId, status: TaskStatus) -> Result<()> {
        let mut row = self
            .tasks
            .get_mut(&id)
            .ok_or_else(|| DashError::NotFound(format!("task {id}")))?;
        row.doc.status = status;
        Ok(())
    }
}
