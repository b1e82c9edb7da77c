use async_trait::async_trait;
use serde_json::json;

use super::{Notifier, RenderedEmail};
use crate::config::MailConfig;

/// Sends notifications through the Resend HTTP API.
pub struct ResendNotifier {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
    from: String,
    to: String,
}

impl ResendNotifier {
    pub fn new(config: &MailConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint: format!("{}/emails", config.api_url.trim_end_matches('/')),
            from: config.from.clone(),
            to: config.to.clone(),
        })
    }

    async fn deliver(&self, email: &RenderedEmail) -> Result<serde_json::Value, String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or("Resend API key not configured")?;

        let payload = json!({
            "from": &self.from,
            "to": [&self.to],
            "subject": &email.subject,
            "html": &email.html,
        });

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("Resend request failed: {e}"))?;

        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to read Resend response body ({status}): {e}");
                String::new()
            }
        };

        if !status.is_success() {
            let body: String = body.chars().take(1024).collect();
            return Err(format!("Resend returned {status}: {body}"));
        }

        Ok(serde_json::from_str(&body).unwrap_or(json!(body)))
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn send(&self, email: &RenderedEmail) -> bool {
        match self.deliver(email).await {
            Ok(response) => {
                tracing::info!("Notification '{}' sent successfully: {response}", email.subject);
                true
            }
            Err(e) => {
                tracing::error!("Error sending notification '{}': {e}", email.subject);
                false
            }
        }
    }
}
