//! JSON body extraction with structured rejections.
//!
//! axum's stock `Json` extractor rejects malformed bodies with a plain-text
//! response; the API contract promises `{error, details?}` for every
//! validation failure, including ones serde catches (bad enums, wrong types).

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

use crate::error::ErrorBody;

/// `Json<T>` with the rejection converted to the API's error body.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_response(&rejection)),
        }
    }
}

fn rejection_response(rejection: &JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: "invalid request body".to_string(),
            details: Some(rejection.body_text()),
        }),
    )
        .into_response()
}
