use crate::domain::error::CheckoutError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// HTTP face of `CheckoutError`; the domain layer knows nothing about axum.
pub struct ApiError(pub CheckoutError);

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self.0 {
            CheckoutError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg.clone(),
            ),
            CheckoutError::Serialization(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                format!("invalid request body: {err}"),
            ),
            CheckoutError::Configuration(err) => {
                tracing::error!(field = err.field(), "deployment misconfigured: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "configuration_error",
                    "internal error".to_string(),
                )
            }
            CheckoutError::Vendor(msg) => {
                tracing::error!("vendor error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "vendor_error",
                    "payment provider unavailable".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error_code": error_code,
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}
