//! Organization-membership access guard.
//!
//! The single place that decides whether a caller may touch an
//! organization-scoped record. Checks are pure reads against the store and
//! are re-derived on every call; nothing is cached.
//!
//! Rules:
//! - no identity: denied
//! - `org_id == identity.subject_id`: granted (personal workspace)
//! - otherwise the caller's stored User must list `org_id` among its
//!   memberships. The membership role is not consulted.

use crate::error::{DashError, Result};
use crate::model::CallId;
use crate::store::RequestCtx;

/// Outcome of a record-level check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Access granted; carries the owning organization id for stamping writes.
    Granted { org_id: String },
    Unauthenticated,
    NotFound,
    Denied,
}

impl AccessDecision {
    /// Owning org id if granted, `None` for every kind of denial.
    pub fn org_id(self) -> Option<String> {
        match self {
            AccessDecision::Granted { org_id } => Some(org_id),
            _ => None,
        }
    }

    /// Raise on denial. A missing record is reported as a permission error
    /// so callers cannot probe for existence.
    pub fn require(self, denied_msg: &str) -> Result<String> {
        match self {
            AccessDecision::Granted { org_id } => Ok(org_id),
            AccessDecision::Unauthenticated => Err(DashError::Unauthenticated),
            AccessDecision::NotFound | AccessDecision::Denied => {
                Err(DashError::PermissionDenied(denied_msg.to_string()))
            }
        }
    }
}

/// Access checks bound to one request context.
pub struct AccessGuard<'a> {
    ctx: &'a RequestCtx,
}

impl<'a> AccessGuard<'a> {
    pub fn new(ctx: &'a RequestCtx) -> Self {
        Self { ctx }
    }

    /// May the caller access `org_id`? Personal workspace counts.
    pub async fn has_org_access(&self, org_id: &str) -> Result<bool> {
        let Some(identity) = self.ctx.identity() else {
            return Ok(false);
        };
        if identity.is_personal_workspace(org_id) {
            return Ok(true);
        }
        self.is_member(&identity.subject_id, org_id).await
    }

    /// Strict membership: the personal workspace shortcut does not apply.
    /// Used where a real organization is required (settings).
    pub async fn has_membership(&self, org_id: &str) -> Result<bool> {
        let Some(identity) = self.ctx.identity() else {
            return Ok(false);
        };
        self.is_member(&identity.subject_id, org_id).await
    }

    /// Owning org id of `call_id` if the caller may access it.
    pub async fn call_access(&self, call_id: CallId) -> Result<Option<String>> {
        Ok(self.authorize_call(call_id).await?.org_id())
    }

    /// Full decision for a call, distinguishing the denial reasons.
    pub async fn authorize_call(&self, call_id: CallId) -> Result<AccessDecision> {
        // Identity first: anonymous callers learn nothing about existence.
        if self.ctx.identity().is_none() {
            return Ok(AccessDecision::Unauthenticated);
        }
        let Some(call) = self.ctx.store().call(call_id).await? else {
            tracing::debug!(%call_id, "call access: not found");
            return Ok(AccessDecision::NotFound);
        };
        if self.has_org_access(&call.org_id).await? {
            Ok(AccessDecision::Granted { org_id: call.org_id })
        } else {
            tracing::debug!(%call_id, org_id = %call.org_id, "call access: denied");
            Ok(AccessDecision::Denied)
        }
    }

    async fn is_member(&self, subject_id: &str, org_id: &str) -> Result<bool> {
        let Some(user) = self.ctx.store().user_by_subject(subject_id).await? else {
            tracing::debug!(subject = %subject_id, "org access: no user record");
            return Ok(false);
        };
        let ok = user.is_member_of(org_id);
        if !ok {
            tracing::debug!(subject = %subject_id, %org_id, "org access: not a member");
        }
        Ok(ok)
    }
}
