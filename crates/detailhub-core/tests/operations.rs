//! Dashboard operations and their denial policy.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use chrono::{Duration, Utc};

use detailhub_core::model::{CallId, Organization, Role, Task, TaskId, TaskStatus};
use detailhub_core::ops::{calls, clients, organizations, tasks, users};
use detailhub_core::store::DocumentStore;

use common::*;

#[tokio::test]
async fn client_list_scoped_to_membership() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    let owner = ctx_as("u1", &store);
    clients::create(&owner, "org_A", "Dana", "+15550101").await.unwrap();
    clients::create(&owner, "org_A", "Eli", "+15550102").await.unwrap();

    add_user(&store, "u2", &[("org_B", Role::Member)]).await;
    let other = ctx_as("u2", &store);
    clients::create(&other, "org_B", "Fay", "+15550103").await.unwrap();

    let listed = clients::list(&owner, "org_A").await.unwrap();
    let names: Vec<_> = listed.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Eli", "Dana"]);

    assert!(clients::list(&owner, "org_B").await.unwrap().is_empty());
}

#[tokio::test]
async fn create_client_without_access_is_rejected() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    let ctx = ctx_as("u1", &store);

    let err = clients::create(&ctx, "org_B", "Dana", "+15550101").await.unwrap_err();
    assert_eq!(err.client_code().as_str(), "PERMISSION_DENIED");
    assert!(store.clients_by_org("org_B").await.unwrap().is_empty());
}

#[tokio::test]
async fn unauthenticated_list_calls_is_empty() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    add_call(&store, "org_A", None).await;

    let listed = calls::list(&anon(&store), "org_A").await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn list_is_empty_but_get_raises_without_access() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    let foreign = add_call(&store, "org_X", None).await;
    let ctx = ctx_as("u1", &store);

    assert!(calls::list(&ctx, "org_X").await.unwrap().is_empty());

    let err = calls::get(&ctx, foreign).await.unwrap_err();
    assert_eq!(err.client_code().as_str(), "PERMISSION_DENIED");
}

#[tokio::test]
async fn get_call_outcomes() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    let call = add_call(&store, "org_A", Some("hello")).await;
    let ctx = ctx_as("u1", &store);

    let got = calls::get(&ctx, call).await.unwrap().unwrap();
    assert_eq!(got.org_id, "org_A");
    assert!(calls::get(&ctx, CallId::new()).await.unwrap().is_none());

    let err = calls::get(&anon(&store), call).await.unwrap_err();
    assert_eq!(err.client_code().as_str(), "UNAUTHENTICATED");
}

#[tokio::test]
async fn calls_listed_newest_first() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    let first = add_call(&store, "org_A", None).await;
    let second = add_call(&store, "org_A", None).await;

    let ids: Vec<_> = calls::list(&ctx_as("u1", &store), "org_A")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, [second, first]);
}

#[tokio::test]
async fn generate_summary_stores_text() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    let call = add_call(&store, "org_A", Some("I'd like a full detail")).await;
    let ctx = ctx_as("u1", &store);

    let summary = calls::generate_summary(&ctx, &InstantSummarizer, call).await.unwrap();
    assert!(summary.contains("+15550100"));

    let stored = store.call(call).await.unwrap().unwrap();
    assert_eq!(stored.summary.as_deref(), Some(summary.as_str()));
}

#[tokio::test]
async fn generate_summary_requires_access_and_transcript() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    let foreign = add_call(&store, "org_B", Some("text")).await;
    let silent = add_call(&store, "org_A", None).await;
    let ctx = ctx_as("u1", &store);

    let err = calls::generate_summary(&ctx, &InstantSummarizer, foreign).await.unwrap_err();
    assert_eq!(err.client_code().as_str(), "PERMISSION_DENIED");
    assert!(store.call(foreign).await.unwrap().unwrap().summary.is_none());

    let err = calls::generate_summary(&ctx, &InstantSummarizer, silent).await.unwrap_err();
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");

    let err = calls::generate_summary(&ctx, &InstantSummarizer, CallId::new()).await.unwrap_err();
    assert_eq!(err.client_code().as_str(), "PERMISSION_DENIED");
}

#[tokio::test]
async fn task_inherits_call_org() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    let call = add_call(&store, "org_A", None).await;
    let ctx = ctx_as("u1", &store);

    let id = tasks::create(&ctx, call, "Call back about pricing", None).await.unwrap();
    let task = store.task(id).await.unwrap().unwrap();
    assert_eq!(task.org_id, "org_A");
    assert_eq!(task.call_id, call);
    assert_eq!(task.status, TaskStatus::Pending);
}

#[tokio::test]
async fn create_task_on_foreign_call_writes_nothing() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    let foreign = add_call(&store, "org_B", None).await;
    let ctx = ctx_as("u1", &store);

    let err = tasks::create(&ctx, foreign, "sneaky", None).await.unwrap_err();
    assert_eq!(err.client_code().as_str(), "PERMISSION_DENIED");
    assert_eq!(store.task_count(), 0);
}

#[tokio::test]
async fn task_listing_and_status_updates() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    add_user(&store, "u2", &[("org_B", Role::Member)]).await;
    let call = add_call(&store, "org_A", None).await;
    let owner = ctx_as("u1", &store);
    let outsider = ctx_as("u2", &store);

    let a = tasks::create(&owner, call, "first", None).await.unwrap();
    let b = tasks::create(&owner, call, "second", Some(1_700_000_000_000)).await.unwrap();

    let ids: Vec<_> = tasks::list_by_call(&owner, call).await.unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, [b, a]);
    assert!(tasks::list_by_call(&outsider, call).await.unwrap().is_empty());
    assert!(tasks::list_by_call(&owner, CallId::new()).await.unwrap().is_empty());

    tasks::update_status(&owner, a, TaskStatus::Completed).await.unwrap();
    assert_eq!(store.task(a).await.unwrap().unwrap().status, TaskStatus::Completed);

    let err = tasks::update_status(&outsider, b, TaskStatus::Completed).await.unwrap_err();
    assert_eq!(err.client_code().as_str(), "PERMISSION_DENIED");
    assert_eq!(store.task(b).await.unwrap().unwrap().status, TaskStatus::Pending);

    let err = tasks::update_status(&owner, TaskId::new(), TaskStatus::Completed).await.unwrap_err();
    assert_eq!(err.client_code().as_str(), "NOT_FOUND");
}

#[tokio::test]
async fn get_or_create_user_is_stable() {
    let store = std::sync::Arc::new(detailhub_core::memory::InMemoryStore::new());
    let ctx = ctx_as("new_user", &store);

    let first = users::get_or_create(&ctx).await.unwrap();
    let second = users::get_or_create(&ctx).await.unwrap();
    assert_eq!(first, second);

    let user = store.user_by_subject("new_user").await.unwrap().unwrap();
    assert!(user.memberships.is_empty());

    let err = users::get_or_create(&anon(&store)).await.unwrap_err();
    assert_eq!(err.client_code().as_str(), "UNAUTHENTICATED");
}

#[tokio::test]
async fn organization_settings_require_membership() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    store
        .put_organization(Organization { external_id: "org_A".into(), name: "Shine Co".into() })
        .await
        .unwrap();
    let ctx = ctx_as("u1", &store);

    let org = organizations::get(&ctx, "org_A").await.unwrap().unwrap();
    assert_eq!(org.name, "Shine Co");

    let err = organizations::get(&ctx, "org_B").await.unwrap_err();
    assert_eq!(err.client_code().as_str(), "PERMISSION_DENIED");

    let err = organizations::get(&ctx, "u1").await.unwrap_err();
    assert_eq!(err.client_code().as_str(), "PERMISSION_DENIED");
}

#[tokio::test]
async fn unsynced_organization_is_none() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    assert!(organizations::get(&ctx_as("u1", &store), "org_A").await.unwrap().is_none());
}

#[tokio::test]
async fn anonymous_mutations_do_not_reveal_existence() {
    let store = store_with_user("u1", &[("org_A", Role::Member)]).await;
    let call = add_call(&store, "org_A", Some("text")).await;
    let task = tasks::create(&ctx_as("u1", &store), call, "follow up", None).await.unwrap();
    let ctx = anon(&store);

    for call_id in [call, CallId::new()] {
        let err = calls::generate_summary(&ctx, &InstantSummarizer, call_id).await.unwrap_err();
        assert_eq!(err.client_code().as_str(), "UNAUTHENTICATED");

        let err = tasks::create(&ctx, call_id, "x", None).await.unwrap_err();
        assert_eq!(err.client_code().as_str(), "UNAUTHENTICATED");
    }
    for task_id in [task, TaskId::new()] {
        let err = tasks::update_status(&ctx, task_id, TaskStatus::Completed).await.unwrap_err();
        assert_eq!(err.client_code().as_str(), "UNAUTHENTICATED");
    }
    assert_eq!(store.task(task).await.unwrap().unwrap().status, TaskStatus::Pending);
}

#[test]
fn overdue_only_when_pending_and_past_due() {
    let now = Utc::now();
    let mut task = Task {
        id: TaskId::new(),
        org_id: "org_A".into(),
        call_id: CallId::new(),
        description: "follow up".into(),
        due_date: Some((now - Duration::hours(1)).timestamp_millis()),
        status: TaskStatus::Pending,
        created_at: now,
    };
    assert!(task.is_overdue(now.timestamp_millis()));

    task.status = TaskStatus::Completed;
    assert!(!task.is_overdue(now.timestamp_millis()));

    task.status = TaskStatus::Pending;
    task.due_date = None;
    assert!(!task.is_overdue(now.timestamp_millis()));
}
