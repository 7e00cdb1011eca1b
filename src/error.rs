use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::envelope::{ErrorCode, ErrorDocument, ErrorObject, JSONAPI_MEDIA_TYPE};
use crate::sun_phase::SunPhaseError;

/// A failed request, rendered as a JSON:API error document.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: Option<ErrorCode>,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: Option<ErrorCode>, detail: impl Into<String>) -> Self {
        Self {
            status,
            code,
            detail: detail.into(),
        }
    }

    pub fn method_not_allowed(method: &Method) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, None, method.as_str())
    }

    pub fn not_found(path: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, None, path)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, None, detail)
    }

    pub fn document(&self) -> ErrorDocument {
        ErrorObject::new(self.status.as_u16(), self.code, self.detail.clone()).into()
    }
}

impl From<SunPhaseError> for ApiError {
    fn from(err: SunPhaseError) -> Self {
        ApiError::internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match serde_json::to_string(&self.document()) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to serialize error document: {}", e);
                String::new()
            }
        };

        (
            self.status,
            [(header::CONTENT_TYPE, JSONAPI_MEDIA_TYPE)],
            body,
        )
            .into_response()
    }
}
