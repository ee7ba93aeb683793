use crate::access::AccessGuard;
use crate::error::{DashError, Result};
use crate::model::Organization;
use crate::store::RequestCtx;

/// Settings of a real organization. Requires an explicit membership; a
/// personal workspace has no settings. `None` if the organization has not
/// been mirrored yet.
pub async fn get(ctx: &RequestCtx, org_id: &str) -> Result<Option<Organization>> {
    if !AccessGuard::new(ctx).has_membership(org_id).await? {
        return Err(DashError::PermissionDenied(
            "you do not have permission to view this organization's settings".into(),
        ));
    }
    ctx.store().organization(org_id).await
}
