//! Caller identity as supplied by the authentication provider.

/// Authenticated caller. Absence of an identity means "unauthenticated".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// External auth subject id. Doubles as the personal workspace org id.
    pub subject_id: String,
}

impl Identity {
    pub fn new(subject_id: impl Into<String>) -> Self {
        Self { subject_id: subject_id.into() }
    }

    /// True if `org_id` names this caller's personal workspace.
    pub fn is_personal_workspace(&self, org_id: &str) -> bool {
        self.subject_id == org_id
    }
}

/// Resolves request credentials into an identity.
///
/// Implementations never error: an unknown or missing credential is simply
/// "no identity", and every downstream check fails closed on that.
pub trait IdentityProvider: Send + Sync {
    fn resolve(&self, credential: Option<&str>) -> Option<Identity>;
}
