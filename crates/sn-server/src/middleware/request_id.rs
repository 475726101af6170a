//! Request id propagation.
//!
//! Every response carries `x-request-id`: the caller's value when it is a
//! usable header token, otherwise a fresh UUID. Handling runs inside a
//! `request` span tagged with the id, and JSON error bodies produced by
//! [`AppError`](crate::error::AppError) get the id written into their
//! `request_id` field.

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::ErrorBody;

/// Header name used for the request identifier.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Longest caller-supplied id that is echoed back.
const MAX_ID_LEN: usize = 128;

pub async fn request_id_middleware(request: Request<Body>, next: Next) -> Response {
    let id = incoming_id(request.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!(
        "request",
        request_id = %id,
        method = %request.method(),
        path = %request.uri().path(),
    );
    let response = next.run(request).instrument(span).await;

    let mut response = match response.extensions().get::<ErrorBody>().cloned() {
        Some(body) => with_error_body(response, body.stamp(&id)),
        None => response,
    };

    if let Ok(val) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(X_REQUEST_ID.clone(), val);
    }
    response
}

fn incoming_id(headers: &HeaderMap) -> Option<String> {
    let id = headers.get(&X_REQUEST_ID)?.to_str().ok()?.trim();
    if id.is_empty() || id.len() > MAX_ID_LEN {
        return None;
    }
    Some(id.to_owned())
}

/// Replace the body of an error response, keeping status and headers.
fn with_error_body(response: Response, body: serde_json::Value) -> Response {
    let (mut parts, _) = response.into_parts();
    let bytes = match serde_json::to_vec(&body) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to re-encode error body: {e}");
            return Response::from_parts(parts, Body::empty());
        }
    };
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
