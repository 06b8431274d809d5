// src/contact.rs
// =============================================================================
// The contact form. Submission is simulated: we validate the form, wait a
// moment as if talking to a mail service, and report success. No message is
// actually delivered anywhere.
//
// Rust concepts:
// - thiserror: One error enum covering every validation failure
// - async fn + tokio::time::sleep: Waiting without blocking the runtime
// =============================================================================

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// How long a simulated submission takes.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("the {0} field is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// What the form shows after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub to_name: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ContactError::MissingField(*field));
        }

        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

// local@domain with something on both sides and no whitespace
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

// Validates and "sends" the form.
pub async fn submit(form: &ContactForm, delay: Duration) -> Result<ContactReceipt, ContactError> {
    form.validate()?;

    info!(subject = %form.subject, "simulating contact form submission");
    tokio::time::sleep(delay).await;

    Ok(ContactReceipt {
        to_name: form.name.trim().to_string(),
        message: SUCCESS_MESSAGE.to_string(),
    })
}
