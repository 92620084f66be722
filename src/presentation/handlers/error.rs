use std::any::Any;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use http_body_util::Full;
use serde::Serialize;

/// Uniform envelope for every handled failure.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub details: String,
}

#[derive(Serialize)]
struct NotFoundBody {
    error: &'static str,
    message: &'static str,
}

/// Converts a route-level failure into the uniform 500 envelope, with a
/// stage-specific message and the underlying failure text as detail.
pub fn failure_response(message: &str, source: &dyn std::error::Error) -> Response {
    tracing::error!(error = %source, "{message}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorEnvelope {
            error: message.to_string(),
            details: source.to_string(),
        }),
    )
        .into_response()
}

/// Fallback for any unmatched path or method.
pub async fn not_found_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            error: "Not Found",
            message: "The requested endpoint does not exist",
        }),
    )
        .into_response()
}

/// Outer boundary: anything escaping route-level handling still surfaces as a
/// well-formed JSON error, never a hung connection.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> axum::http::Response<Full<Bytes>> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(details = %details, "Unexpected error");

    let body = serde_json::json!({
        "error": "Unexpected error",
        "details": details,
    })
    .to_string();

    axum::http::Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::from(body))
        .unwrap_or_default()
}
