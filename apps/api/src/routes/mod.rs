pub mod health;
pub mod sample;

use axum::{
    http::Uri,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::middleware::{log_request, parse_json_body};
use crate::state::AppState;

/// Any request matching no route terminates here instead of falling
/// through silently.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    // All business routes live under the versioned prefix.
    let v1 = Router::new()
        .route("/ping", get(sample::ping_handler))
        .route("/echo", post(sample::echo_handler));

    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/v1", v1)
        .fallback(not_found)
        // Layer order: the request logger runs first, then body parsing,
        // then routing.
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            parse_json_body,
        ))
        .layer(axum_middleware::from_fn(log_request))
        .with_state(state)
}
