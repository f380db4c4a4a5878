//! Signup form validation
//!
//! The only checks made before a request leaves the client: an activity must
//! be selected and the email must belong to the school domain.

use thiserror::Error;

/// Raw values read from the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub activity: String,
    pub email: String,
}

impl SignupForm {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }
}

/// A form that passed validation, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSignup {
    pub activity: String,
    /// Trimmed email
    pub email: String,
}

/// Client-side validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select an activity")]
    MissingActivity,

    #[error("Email must be a @{domain} address")]
    EmailDomain { domain: String },
}

/// Check a signup form against the required email domain.
///
/// The activity is checked first, so an empty form reports the missing
/// selection rather than the email.
pub fn validate_signup(form: &SignupForm, domain: &str) -> Result<ValidSignup, ValidationError> {
    let email = form.email.trim();

    if form.activity.is_empty() {
        return Err(ValidationError::MissingActivity);
    }

    if !email.ends_with(&format!("@{}", domain)) {
        return Err(ValidationError::EmailDomain {
            domain: domain.to_string(),
        });
    }

    Ok(ValidSignup {
        activity: form.activity.clone(),
        email: email.to_string(),
    })
}
