//! Field-level checks applied to an incoming payload before a record is
//! admitted to storage.
//!
//! Every check reports its first failure as a value; a rejected payload is a
//! normal outcome here, never a panic. Callers run the checks in a fixed
//! order and stop at the first error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::utils::validation::{MIN_PHONE_LENGTH, PHONE_PREFIXES};

// Word characters, dots and hyphens around a single '@', with a
// dot-separated word suffix.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("Failed to compile email regex")
});

/// Everything that can disqualify an incoming payload. Each variant renders
/// the one descriptive message handed back to the caller.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Payload is missing")]
    MalformedPayload,

    #[error("Payload must be a valid JSON object")]
    InvalidType,

    #[error("Payload cannot be empty")]
    EmptyPayload,

    #[error("Field '{0}' is required and cannot be empty")]
    MissingField(String),

    #[error("Field '{field}' must contain only alphabetic characters and be at least {min_length} characters long")]
    InvalidField { field: String, min_length: usize },

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Phone number must be numeric and at least 11 digits long starting with a valid prefix (070, 080, 090, 081, 091)")]
    InvalidPhoneFormat,

    #[error("User with {field} '{value}' already exists")]
    DuplicateValue { field: String, value: String },
}

/// The one coercion rule applied to payload values before any text check:
/// a JSON string yields its content, anything else yields its JSON
/// rendering ("1.5", "true", "null").
pub fn coerce_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Checks that a payload was supplied at all, is a JSON object, and has at
/// least one entry.
pub fn validate_payload(payload: Option<&Value>) -> Result<(), ValidationError> {
    let payload = match payload {
        None | Some(Value::Null) => return Err(ValidationError::MalformedPayload),
        Some(value) => value,
    };

    let entries = payload.as_object().ok_or(ValidationError::InvalidType)?;
    if entries.is_empty() {
        return Err(ValidationError::EmptyPayload);
    }
    Ok(())
}

/// Checks that `field` is present and does not trim down to nothing.
/// Non-text values go through the coercion rule first, so a number or a
/// boolean counts as present.
pub fn validate_required_field(payload: &Value, field: &str) -> Result<(), ValidationError> {
    let value = payload
        .get(field)
        .ok_or_else(|| ValidationError::MissingField(field.to_string()))?;

    if coerce_to_text(value).trim().is_empty() {
        return Err(ValidationError::MissingField(field.to_string()));
    }
    Ok(())
}

/// Checks that `field` holds letters only, and at least `min_length` of
/// them. The alphabetic check runs on the un-trimmed text, so a name
/// carrying any space or hyphen is rejected.
pub fn validate_field_length(
    payload: &Value,
    field: &str,
    min_length: usize,
) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidField {
        field: field.to_string(),
        min_length,
    };

    let value = payload.get(field).ok_or_else(invalid)?;
    let text = coerce_to_text(value);
    if !text.chars().all(char::is_alphabetic) || text.trim().chars().count() < min_length {
        return Err(invalid());
    }
    Ok(())
}

/// Returns whether `value` looks like an email address.
pub fn validate_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Returns whether `value` is an acceptable phone number: decimal digits
/// only, at least 11 of them (no upper bound), starting with one of the
/// accepted prefixes.
pub fn validate_phone(value: &str) -> bool {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if value.len() < MIN_PHONE_LENGTH {
        return false;
    }
    PHONE_PREFIXES.iter().any(|prefix| value.starts_with(prefix))
}
