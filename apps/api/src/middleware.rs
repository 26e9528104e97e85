use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::header::CONTENT_TYPE,
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// Logs method and path for every request before any other processing.
pub async fn log_request(req: Request, next: Next) -> Response {
    info!(method = %req.method(), path = %req.uri().path(), "request received");
    next.run(req).await
}

/// Buffers and parses JSON request bodies before routing.
///
/// Requests with a JSON content type get their body read up front and
/// validated as JSON; malformed bodies terminate with a 400 before any
/// route handler runs. The buffered bytes are handed to the matched
/// handler untouched.
pub async fn parse_json_body(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let is_json = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    if !is_json {
        return Ok(next.run(req).await);
    }

    // Base64-encoded uploads inflate the source PDF by ~4/3; allow headroom.
    let limit = (state.config.max_resume_size_bytes as usize).saturating_mul(2);

    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, limit)
        .await
        .map_err(|e| AppError::Validation(format!("Unreadable request body: {e}")))?;

    if !bytes.is_empty() {
        serde_json::from_slice::<serde_json::Value>(&bytes)
            .map_err(|e| AppError::Validation(format!("Malformed JSON body: {e}")))?;
    }

    let req = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(req).await)
}
