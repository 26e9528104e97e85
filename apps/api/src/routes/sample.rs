use axum::Json;
use serde_json::{json, Value};

/// GET /api/v1/ping
pub async fn ping_handler() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

/// POST /api/v1/echo
/// Returns the JSON body it was given. Exercises the gateway's
/// body-parsing middleware end to end.
pub async fn echo_handler(Json(body): Json<Value>) -> Json<Value> {
    Json(body)
}
