use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use detailhub_core::error::DashError;
use detailhub_core::model::{Call, CallId};
use detailhub_core::ops::calls;

use crate::app_state::AppState;
use crate::context::Caller;
use crate::error::ApiResult;

pub async fn list(Caller(ctx): Caller, Path(org_id): Path<String>) -> ApiResult<Json<Vec<Call>>> {
    Ok(Json(calls::list(&ctx, &org_id).await?))
}

pub async fn get(Caller(ctx): Caller, Path(call_id): Path<String>) -> ApiResult<Json<Call>> {
    let call_id: CallId = call_id.parse()?;
    let call = calls::get(&ctx, call_id)
        .await?
        .ok_or_else(|| DashError::NotFound(format!("call {call_id}")))?;
    Ok(Json(call))
}

pub async fn generate_summary(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path(call_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let call_id: CallId = call_id.parse()?;
    let summary = calls::generate_summary(&ctx, state.summarizer(), call_id).await?;
    Ok(Json(json!({ "summary": summary })))
}
