//! Shared error type across detailhub crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// No identity on the request.
    Unauthenticated,
    /// Target record absent.
    NotFound,
    /// Identity present but not a member of the owning organization.
    PermissionDenied,
    /// Invalid input.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Unauthenticated => "UNAUTHENTICATED",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::PermissionDenied => "PERMISSION_DENIED",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DashError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum DashError {
    #[error("you must be logged in")]
    Unauthenticated,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl DashError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            DashError::Unauthenticated => ClientCode::Unauthenticated,
            DashError::NotFound(_) => ClientCode::NotFound,
            DashError::PermissionDenied(_) => ClientCode::PermissionDenied,
            DashError::BadRequest(_) => ClientCode::BadRequest,
            DashError::Internal(_) => ClientCode::Internal,
        }
    }
}
