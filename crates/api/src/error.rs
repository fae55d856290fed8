//! Response-shaping error type for the HTTP layer.
//!
//! Every failure is caught at the handler boundary and rendered as a JSON
//! body; nothing propagates further and nothing is retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    payload: Value,
}

impl ApiError {
    pub fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            payload: json!({ "message": message }),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            payload: json!({ "message": message }),
        }
    }

    /// Storage and other unexpected failures; the raw error message is
    /// exposed to the client.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            payload: json!({ "message": err.to_string() }),
        }
    }

    /// The job-ad create endpoint reports failures under an `error` key
    /// instead of `message`; kept as-is for wire compatibility.
    pub fn creation_failed(err: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            payload: json!({ "error": err.to_string() }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.payload)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_renders_message_key() {
        let response = ApiError::not_found("No JobAd record found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(response).await,
            json!({ "message": "No JobAd record found" })
        );
    }

    #[tokio::test]
    async fn internal_exposes_raw_error_under_message_key() {
        let response = ApiError::internal("sqlx error: boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            json!({ "message": "sqlx error: boom" })
        );
    }

    #[tokio::test]
    async fn creation_failures_use_error_key() {
        let response = ApiError::creation_failed("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await, json!({ "error": "boom" }));
    }
}
