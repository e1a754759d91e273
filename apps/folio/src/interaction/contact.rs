//! Contact form check and the toast shown after a submit attempt.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::FolioError;

/// `local@domain.tld` with no whitespace and a single `@`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    fn success(message: &str) -> Self {
        Notification {
            kind: NotificationKind::Success,
            message: message.to_string(),
        }
    }

    fn error(message: &str) -> Self {
        Notification {
            kind: NotificationKind::Error,
            message: message.to_string(),
        }
    }

    /// Markup for the toast; the message is interpolated as-is.
    pub fn to_html(&self) -> String {
        let kind = match self.kind {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        };
        format!(
            r#"<div class="notification {kind}"><div class="notification-content"><span class="notification-message">{}</span><button class="notification-close">&times;</button></div></div>"#,
            self.message
        )
    }
}

/// Checks the contact form: every field filled, email shaped like
/// `local@domain.tld` with no whitespace.
pub fn check_contact(form: &ContactForm) -> Result<(), FolioError> {
    let fields = [&form.name, &form.email, &form.subject, &form.message];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(FolioError::Validation(
            "Please fill in all fields".to_string(),
        ));
    }
    if !is_valid_email(form.email.trim()) {
        return Err(FolioError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(())
}

/// The notification shown after a submit attempt.
pub fn validate_contact(form: &ContactForm) -> Notification {
    match check_contact(form) {
        Ok(()) => Notification::success("Message sent successfully! I'll get back to you soon."),
        Err(FolioError::Validation(msg)) => Notification::error(&msg),
        Err(other) => Notification::error(&other.to_string()),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
