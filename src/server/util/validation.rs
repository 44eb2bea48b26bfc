//! Input validation helpers for order submission.
//!
//! Centralized text length constants and validation functions. Every failure maps to a
//! field-level [`OrderError::Validation`] carrying the offending field name.

use crate::server::error::order::OrderError;

/// Customer name fields
pub const MAX_NAME_LEN: usize = 100;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 200;

/// Order comments
pub const MAX_COMMENT_LEN: usize = 200;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &'static str,
    max_len: usize,
) -> Result<(), OrderError> {
    if value.trim().is_empty() {
        return Err(OrderError::Validation {
            field,
            message: "This field must not be empty.".to_string(),
        });
    }

    if value.len() > max_len {
        return Err(OrderError::Validation {
            field,
            message: format!("This field is too long ({} chars, max {max_len}).", value.len()),
        });
    }

    Ok(())
}

/// Validate a customer phone number against the Russian numbering plan and normalize it.
///
/// Accepts a `+7` or `8` prefix followed by ten digits, ignoring spaces, dashes, and
/// parentheses. Returns the number normalized to `+7XXXXXXXXXX`.
pub fn validate_phonenumber(raw: &str) -> Result<String, OrderError> {
    let invalid = || OrderError::Validation {
        field: "phonenumber",
        message: "Invalid phone number entered.".to_string(),
    };

    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    let digits = if let Some(rest) = cleaned.strip_prefix("+7") {
        rest
    } else if let Some(rest) = cleaned.strip_prefix('8') {
        rest
    } else {
        return Err(invalid());
    };

    if digits.len() != 10 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    Ok(format!("+7{digits}"))
}
