use axum::Json;
use serde_json::{json, Value};

use detailhub_core::ops::users;

use crate::context::Caller;
use crate::error::ApiResult;

pub async fn me(Caller(ctx): Caller) -> ApiResult<Json<Value>> {
    let id = users::get_or_create(&ctx).await?;
    Ok(Json(json!({ "id": id })))
}
