pub mod resend;
pub mod templates;

use async_trait::async_trait;

use crate::models::{FormSubmission, FormType};

/// A notification ready to hand to a [`Notifier`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

/// Delivers rendered notifications to the operator inbox.
///
/// Implementations make at most one delivery attempt and report the outcome
/// as a bool. Failures are logged by the implementation, never returned.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, email: &RenderedEmail) -> bool;
}

pub fn render(form: &FormSubmission) -> RenderedEmail {
    match form.form_type {
        FormType::Assessment => RenderedEmail {
            subject: templates::assessment_subject(form),
            html: templates::render_assessment(form),
        },
        FormType::Contact => RenderedEmail {
            subject: templates::contact_subject(form),
            html: templates::render_contact(form),
        },
    }
}

/// Render `form` and pass it to `notifier`.
pub async fn notify(notifier: &dyn Notifier, form: &FormSubmission) -> bool {
    let email = render(form);
    notifier.send(&email).await
}
