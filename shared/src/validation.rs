//! Validation utilities for the VanSuraksha platform
//!
//! Readings fed to the classifier are never validated here; they are
//! defaulted instead (see [`crate::lenient`]). These checks cover the
//! presentation forms only.

use thiserror::Error;
use validator::Validate;

use crate::models::ContactMessage;

// ============================================================================
// Form Validations
// ============================================================================

/// Check that every named field has a non-blank value.
///
/// Returns the name of the first blank field.
pub fn validate_required_fields<'a>(fields: &[(&'a str, &str)]) -> Result<(), &'a str> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(*name),
        None => Ok(()),
    }
}

/// A validation failure tied to one field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Validate a contact message, reporting the first offending field.
///
/// Fields are checked in form order so the reported error is stable.
/// Whitespace-only values count as missing.
pub fn validate_contact_message(message: &ContactMessage) -> Result<(), FieldError> {
    let required = [
        ("name", message.name.as_str()),
        ("email", message.email.as_str()),
        ("subject", message.subject.as_str()),
        ("message", message.message.as_str()),
    ];
    if let Err(field) = validate_required_fields(&required) {
        return Err(FieldError {
            field: field.to_string(),
            message: format!("The {} field is required", field),
        });
    }

    let errors = match message.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };
    let by_field = errors.field_errors();

    for field in ["name", "email", "subject", "message"] {
        if let Some(first) = by_field.get(field).and_then(|errs| errs.first()) {
            return Err(FieldError {
                field: field.to_string(),
                message: first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field)),
            });
        }
    }

    Err(FieldError {
        field: "form".to_string(),
        message: errors.to_string(),
    })
}
