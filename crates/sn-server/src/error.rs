//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`sn_core::Error`] so that route handlers
//! can return `Result<T, AppError>` and use `?` on core results.
//!
//! The JSON body is `{ error, code, request_id }`. Handlers rarely know the
//! request id, so the body is also attached to the response as an
//! [`ErrorBody`] extension and the request-id middleware fills the id in on
//! the way out.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: sn_core::Error,
    request_id: Option<String>,
}

impl AppError {
    pub fn new(inner: sn_core::Error) -> Self {
        Self {
            inner,
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }
}

impl From<sn_core::Error> for AppError {
    fn from(e: sn_core::Error) -> Self {
        Self::new(e)
    }
}

/// JSON error body, kept on the response so middleware can amend it.
#[derive(Debug, Clone)]
pub struct ErrorBody(pub Value);

impl ErrorBody {
    /// Set `request_id` unless the handler already did, and re-render.
    pub fn stamp(mut self, request_id: &str) -> Value {
        if self.0["request_id"].is_null() {
            self.0["request_id"] = Value::String(request_id.to_owned());
        }
        self.0
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in API handler"
            );
        }

        let body = json!({
            "error": self.inner.to_string(),
            "code": self.inner.code(),
            "request_id": self.request_id,
        });

        let mut response = (status, axum::Json(body.clone())).into_response();
        response.extensions_mut().insert(ErrorBody(body));
        response
    }
}
