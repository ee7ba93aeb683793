use crate::access::AccessGuard;
use crate::error::{DashError, Result};
use crate::model::{Call, CallId};
use crate::store::RequestCtx;
use crate::summary::SummaryGenerator;

/// Calls for `org_id`, newest first. Empty when the caller has no access.
pub async fn list(ctx: &RequestCtx, org_id: &str) -> Result<Vec<Call>> {
    if !AccessGuard::new(ctx).has_org_access(org_id).await? {
        return Ok(vec![]);
    }
    ctx.store().calls_by_org(org_id).await
}

/// A single call. `None` if it does not exist.
pub async fn get(ctx: &RequestCtx, call_id: CallId) -> Result<Option<Call>> {
    ctx.require_identity()?;

    let Some(call) = ctx.store().call(call_id).await? else {
        return Ok(None);
    };
    if !AccessGuard::new(ctx).has_org_access(&call.org_id).await? {
        return Err(DashError::PermissionDenied(
            "you do not have permission to view this call".into(),
        ));
    }
    Ok(Some(call))
}

/// Generate and store a summary for a call with a transcript.
pub async fn generate_summary(
    ctx: &RequestCtx,
    summarizer: &dyn SummaryGenerator,
    call_id: CallId,
) -> Result<String> {
    AccessGuard::new(ctx)
        .authorize_call(call_id)
        .await?
        .require("you do not have permission to modify this call")?;

    let call = ctx
        .store()
        .call(call_id)
        .await?
        .ok_or_else(|| DashError::NotFound(format!("call {call_id}")))?;
    if call.transcript.is_none() {
        return Err(DashError::BadRequest(format!("call {call_id} has no transcript")));
    }

    let summary = summarizer.summarize(&call).await?;
    ctx.store().patch_call_summary(call_id, summary.clone()).await?;
    tracing::info!(%call_id, org_id = %call.org_id, "call summary stored");
    Ok(summary)
}
