use chrono::Utc;

use crate::access::AccessGuard;
use crate::error::{DashError, Result};
use crate::model::{CallId, Task, TaskId, TaskStatus};
use crate::store::RequestCtx;

/// Tasks attached to `call_id`, newest first. Empty when the call is missing
/// or the caller has no access.
pub async fn list_by_call(ctx: &RequestCtx, call_id: CallId) -> Result<Vec<Task>> {
    if AccessGuard::new(ctx).call_access(call_id).await?.is_none() {
        return Ok(vec![]);
    }
    ctx.store().tasks_by_call(call_id).await
}

/// Create a pending task on a call. The task inherits the call's org id.
pub async fn create(
    ctx: &RequestCtx,
    call_id: CallId,
    description: &str,
    due_date: Option<i64>,
) -> Result<TaskId> {
    let org_id = AccessGuard::new(ctx)
        .authorize_call(call_id)
        .await?
        .require("you do not have permission to create tasks for this call")?;
    if description.trim().is_empty() {
        return Err(DashError::BadRequest("task description must not be empty".into()));
    }

    let task = Task {
        id: TaskId::new(),
        org_id,
        call_id,
        description: description.to_string(),
        due_date,
        status: TaskStatus::Pending,
        created_at: Utc::now(),
    };
    let id = ctx.store().insert_task(task).await?;
    tracing::info!(task_id = %id, %call_id, "task created");
    Ok(id)
}

pub async fn update_status(ctx: &RequestCtx, task_id: TaskId, status: TaskStatus) -> Result<()> {
    ctx.require_identity()?;

    let task = ctx
        .store()
        .task(task_id)
        .await?
        .ok_or_else(|| DashError::NotFound(format!("task {task_id}")))?;

    AccessGuard::new(ctx)
        .authorize_call(task.call_id)
        .await?
        .require("you do not have permission to update this task")?;

    ctx.store().patch_task_status(task_id, status).await?;
    tracing::info!(%task_id, ?status, "task status updated");
    Ok(())
}
