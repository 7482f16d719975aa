//! Field-level validation for sign-in inputs.
//!
//! Only required-field checks live here; the identity service owns every
//! other rule.

use crate::core::error::AppError;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result` for `?` chains.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(AppError::Validation(self.error.unwrap_or_default()))
        }
    }
}

/// Validate that a field is not blank.
pub fn validate_required(label: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", label));
    }

    ValidationResult::ok()
}
