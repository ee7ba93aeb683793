use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use detailhub_core::model::{CallId, Task, TaskId, TaskStatus};
use detailhub_core::ops::tasks;

use crate::context::Caller;
use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTaskReq {
    pub description: String,
    /// Unix timestamp in milliseconds.
    #[serde(default)]
    pub due_date: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTaskReq {
    pub status: TaskStatus,
}

pub async fn list_by_call(Caller(ctx): Caller, Path(call_id): Path<String>) -> ApiResult<Json<Vec<Task>>> {
    let call_id: CallId = call_id.parse()?;
    Ok(Json(tasks::list_by_call(&ctx, call_id).await?))
}

pub async fn create(
    Caller(ctx): Caller,
    Path(call_id): Path<String>,
    body: Result<Json<CreateTaskReq>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Json(req) = body?;
    let call_id: CallId = call_id.parse()?;
    let id = tasks::create(&ctx, call_id, &req.description, req.due_date).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

pub async fn update_status(
    Caller(ctx): Caller,
    Path(task_id): Path<String>,
    body: Result<Json<UpdateTaskReq>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(req) = body?;
    let task_id: TaskId = task_id.parse()?;
    tasks::update_status(&ctx, task_id, req.status).await?;
    Ok(StatusCode::NO_CONTENT)
}
