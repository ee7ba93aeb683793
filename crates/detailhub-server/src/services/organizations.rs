use axum::extract::Path;
use axum::Json;

use detailhub_core::model::Organization;
use detailhub_core::ops::organizations;

use crate::context::Caller;
use crate::error::ApiResult;

/// `null` when the organization has not been mirrored yet.
pub async fn get(Caller(ctx): Caller, Path(org_id): Path<String>) -> ApiResult<Json<Option<Organization>>> {
    Ok(Json(organizations::get(&ctx, &org_id).await?))
}
