use chrono::Utc;

use crate::access::AccessGuard;
use crate::error::{DashError, Result};
use crate::model::{Client, ClientId};
use crate::store::RequestCtx;

/// Clients of `org_id`, newest first. Empty when the caller has no access.
pub async fn list(ctx: &RequestCtx, org_id: &str) -> Result<Vec<Client>> {
    if !AccessGuard::new(ctx).has_org_access(org_id).await? {
        return Ok(vec![]);
    }
    ctx.store().clients_by_org(org_id).await
}

pub async fn create(
    ctx: &RequestCtx,
    org_id: &str,
    name: &str,
    phone_number: &str,
) -> Result<ClientId> {
    if !AccessGuard::new(ctx).has_org_access(org_id).await? {
        return Err(DashError::PermissionDenied(
            "you do not have permission to create clients for this organization".into(),
        ));
    }
    if name.trim().is_empty() {
        return Err(DashError::BadRequest("client name must not be empty".into()));
    }

    let client = Client {
        id: ClientId::new(),
        org_id: org_id.to_string(),
        name: name.to_string(),
        phone_number: phone_number.to_string(),
        created_at: Utc::now(),
    };
    let id = ctx.store().insert_client(client).await?;
    tracing::info!(client_id = %id, %org_id, "client created");
    Ok(id)
}
