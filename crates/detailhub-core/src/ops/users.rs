use crate::error::Result;
use crate::model::{User, UserId};
use crate::store::RequestCtx;

/// Id of the caller's User record, creating it with no memberships on first
/// use.
pub async fn get_or_create(ctx: &RequestCtx) -> Result<UserId> {
    let identity = ctx.require_identity()?;

    if let Some(user) = ctx.store().user_by_subject(&identity.subject_id).await? {
        return Ok(user.id);
    }

    let id = ctx
        .store()
        .insert_user(User {
            id: UserId::new(),
            subject_id: identity.subject_id.clone(),
            memberships: vec![],
        })
        .await?;
    tracing::info!(user_id = %id, subject = %identity.subject_id, "user created");
    Ok(id)
}
