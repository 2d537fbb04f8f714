//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use smartstay_domain::error::SmartStayError;

/// JSON error body returned by API endpoints: `{error, details?}`.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Maps [`SmartStayError`] to an HTTP response with appropriate status code.
pub struct ApiError(SmartStayError);

impl From<SmartStayError> for ApiError {
    fn from(err: SmartStayError) -> Self {
        Self(err)
    }
}

impl From<smartstay_domain::error::ValidationError> for ApiError {
    fn from(err: smartstay_domain::error::ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<smartstay_domain::error::StorageError> for ApiError {
    fn from(err: smartstay_domain::error::StorageError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SmartStayError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SmartStayError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                details: None,
            }),
        )
            .into_response()
    }
}
