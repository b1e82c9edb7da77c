use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::email;
use crate::error::AppError;
use crate::models::{FormSubmission, FormType, NotificationRequest, NotificationResult};
use crate::state::SharedState;

pub async fn send_form_notification(
    State(state): State<SharedState>,
    payload: Result<Json<NotificationRequest>, JsonRejection>,
) -> Result<Json<NotificationResult>, AppError> {
    let Json(req) = payload?;

    let form_type = FormType::parse(&req.form_type)
        .ok_or_else(|| AppError::BadRequest("Invalid form type".to_string()))?;

    let form = FormSubmission::new(form_type, req.form_data).stamp(Utc::now());

    queue_notification(&state, form)
        .map_err(|e| AppError::Internal(format!("Failed to send notification: {e}")))?;

    Ok(Json(NotificationResult {
        success: true,
        message: format!("{form_type} form notification queued"),
    }))
}

/// Queue a fixed sample contact notification for manual checks.
pub async fn test_email(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    let mut data = Map::new();
    data.insert("name".to_string(), json!("Test User"));
    data.insert("email".to_string(), json!("test@example.com"));
    data.insert(
        "message".to_string(),
        json!("This is a test message to verify email functionality."),
    );

    let form = FormSubmission::new(FormType::Contact, data).stamp(Utc::now());

    queue_notification(&state, form)
        .map_err(|e| AppError::Internal(format!("Failed to send test email: {e}")))?;

    Ok(Json(json!({ "message": "Test email queued successfully" })))
}

fn queue_notification(state: &SharedState, form: FormSubmission) -> Result<(), String> {
    let label = match form.form_type {
        FormType::Assessment => "assessment-notification",
        FormType::Contact => "contact-notification",
    };
    let notifier = state.notifier.clone();

    state
        .background
        .spawn(label, async move { email::notify(notifier.as_ref(), &form).await })
}
