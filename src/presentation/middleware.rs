//! HTTP middleware for the web server

use axum::{
    extract::{Request, rejection::JsonRejection},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use std::time::Instant;
use uuid::Uuid;

use crate::presentation::models::ErrorResponse;

/// Convert a JSON body rejection to an HTTP error response.
///
/// Malformed input is the only failure a scan can hit; it is reported to the
/// caller with the parse failure description and never retried.
pub fn parse_rejection_response(rejection: &JsonRejection) -> Response {
    tracing::warn!(
        error = %rejection,
        http_status = %StatusCode::BAD_REQUEST,
        error_code = "PARSE_ERROR",
        "Client error mapped to HTTP response"
    );

    let error_response = ErrorResponse {
        code: "PARSE_ERROR".to_string(),
        message: format!("Failed to parse scan request body: {}", rejection.body_text()),
        details: None,
        request_id: Uuid::new_v4(),
        timestamp: Utc::now(),
    };

    (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
}

/// Security headers middleware
pub async fn security_headers_middleware(
    request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert(
        "x-content-type-options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        "referrer-policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}

/// Request logging middleware with timing and request ID
pub async fn logging_middleware(request: Request<axum::body::Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = Uuid::new_v4();
    let start_time = Instant::now();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        "Processing request"
    );

    let response = next.run(request).await;
    let duration = start_time.elapsed();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}
