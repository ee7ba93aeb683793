//! HTTP mapping for `DashError`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use detailhub_core::error::{ClientCode, DashError};

/// Handler error wrapper so core errors can be rendered as responses.
#[derive(Debug)]
pub struct ApiError(pub DashError);

impl From<DashError> for ApiError {
    fn from(e: DashError) -> Self {
        Self(e)
    }
}

/// Malformed request bodies share the JSON error shape.
impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self(DashError::BadRequest(e.body_text()))
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::Unauthenticated => StatusCode::UNAUTHORIZED,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::PermissionDenied => StatusCode::FORBIDDEN,
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(json!({
            "error": code.as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
