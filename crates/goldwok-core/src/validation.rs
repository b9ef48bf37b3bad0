//! # Validation Module
//!
//! Input validation for the checkout boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Frontend (TypeScript)                                     │
//! │  ├── Basic format checks (empty, length)                            │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE (before an order payload is built)            │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: The remote order service (authoritative)                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use goldwok_core::validation::{validate_email, validate_phone};
//!
//! validate_email("kim@example.com").unwrap();
//! validate_phone("(604) 555-0188").unwrap();
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name (first or last).
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
pub fn validate_customer_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// Single `@`, non-empty local part, dotted domain, no whitespace;
/// the same shape the frontend checks before submitting.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must look like name@example.com".to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None)
            if !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            Ok(())
        }
        _ => Err(invalid()),
    }
}

/// Validates a phone number.
///
/// ## Rules
/// - Digits, spaces, and `+ - ( )` only
/// - At least 10 digits
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    let allowed = |c: char| c.is_ascii_digit() || c.is_whitespace() || "+-()".contains(c);
    if !phone.chars().all(allowed) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "may contain only digits, spaces, and + - ( )".to_string(),
        });
    }

    let digit_count = phone.chars().filter(char::is_ascii_digit).count();
    if digit_count < 10 {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain at least 10 digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("firstName", "Kim").is_ok());
        assert!(validate_customer_name("firstName", "").is_err());
        assert!(validate_customer_name("firstName", "   ").is_err());
        assert!(validate_customer_name("lastName", &"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("kim@example.com").is_ok());
        assert!(validate_email("kim.lee@mail.example.ca").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("kim@nodot").is_err());
        assert!(validate_email("kim @example.com").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("6045550188").is_ok());
        assert!(validate_phone("(604) 555-0188").is_ok());
        assert!(validate_phone("+1 604 555 0188").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("555-0188").is_err()); // too few digits
        assert!(validate_phone("604-555-01x8").is_err()); // bad character
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1795).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }
}
