use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use detailhub_core::model::Client;
use detailhub_core::ops::clients;

use crate::context::Caller;
use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateClientReq {
    pub name: String,
    pub phone_number: String,
}

pub async fn list(Caller(ctx): Caller, Path(org_id): Path<String>) -> ApiResult<Json<Vec<Client>>> {
    Ok(Json(clients::list(&ctx, &org_id).await?))
}

pub async fn create(
    Caller(ctx): Caller,
    Path(org_id): Path<String>,
    body: Result<Json<CreateClientReq>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Json(req) = body?;
    let id = clients::create(&ctx, &org_id, &req.name, &req.phone_number).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}
