pub mod notifications;
pub mod status;

use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde_json::{json, Value};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/status", get(status::list).post(status::create))
        .route(
            "/api/send-form-notification",
            post(notifications::send_form_notification),
        )
        .route("/api/test-email", post(notifications::test_email))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}
