//! HTTP error mapping for the prediction boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use diabetes_risk_core::CoreError;

/// Wrapper turning pipeline errors into HTTP responses.
///
/// Input errors map to 422 (the request is well-formed HTTP but fails
/// field validation); everything else is a 500. Per-request failures are
/// isolated by construction: the pipeline never mutates shared state, so
/// there is nothing to clean up or poison here.
#[derive(Debug)]
pub struct ApiError(pub CoreError);

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_input_error() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            // Non-input failures mean the artifact pair is bad; every
            // request will fail identically, so make it loud.
            tracing::error!(error = %self.0, "prediction pipeline failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
