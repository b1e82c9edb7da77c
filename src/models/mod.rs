pub mod form;
pub mod status_check;

pub use form::{FormSubmission, FormType, NotificationRequest, NotificationResult};
pub use status_check::StatusCheck;
