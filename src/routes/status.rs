use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::models::StatusCheck;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateStatusCheck {
    pub client_name: String,
}

pub async fn create(
    State(state): State<SharedState>,
    payload: Result<Json<CreateStatusCheck>, JsonRejection>,
) -> Result<Json<StatusCheck>, AppError> {
    let Json(req) = payload?;
    let check = db::status_checks::create(&state.pool, &req.client_name).await?;
    tracing::debug!("Status check {} stored for {}", check.id, check.client_name);
    Ok(Json(check))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<StatusCheck>>, AppError> {
    let checks = db::status_checks::list(&state.pool, db::status_checks::LIST_LIMIT).await?;
    Ok(Json(checks))
}
