use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SUBMITTED_AT: &str = "submitted_at";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormType {
    Assessment,
    Contact,
}

impl FormType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "assessment" => Some(FormType::Assessment),
            "contact" => Some(FormType::Contact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Assessment => "assessment",
            FormType::Contact => "contact",
        }
    }
}

impl std::fmt::Display for FormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/send-form-notification`.
///
/// `form_type` stays a plain string so an unknown value reaches the handler
/// and gets the fixed "Invalid form type" response. `recipient_email` is
/// accepted for compatibility and ignored.
#[derive(Debug, Deserialize)]
pub struct NotificationRequest {
    pub form_data: Map<String, Value>,
    pub form_type: String,
    #[serde(default)]
    pub recipient_email: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NotificationResult {
    pub success: bool,
    pub message: String,
}

/// One form submission on its way to the notifier. Lives only as long as the
/// background send.
#[derive(Debug, Clone)]
pub struct FormSubmission {
    pub form_type: FormType,
    pub data: Map<String, Value>,
}

impl FormSubmission {
    pub fn new(form_type: FormType, data: Map<String, Value>) -> Self {
        Self { form_type, data }
    }

    /// Set `submitted_at`, replacing anything the caller sent under that key.
    pub fn stamp(mut self, at: DateTime<Utc>) -> Self {
        self.data.insert(
            SUBMITTED_AT.to_string(),
            Value::String(format_submitted_at(at)),
        );
        self
    }

    /// Text for a payload field. Missing keys and `null` yield `None`; non-string
    /// scalars and nested values render as their JSON text.
    pub fn field(&self, key: &str) -> Option<String> {
        match self.data.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    pub fn field_or(&self, key: &str, fallback: &str) -> String {
        self.field(key).unwrap_or_else(|| fallback.to_string())
    }
}

pub fn format_submitted_at(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
