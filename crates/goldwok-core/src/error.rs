//! # Error Types
//!
//! Domain-specific error types for goldwok-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  goldwok-core errors (this file)                                    │
//! │  ├── CoreError        - Umbrella for domain failures                │
//! │  ├── SelectionError   - Combo customization preconditions           │
//! │  └── ValidationError  - Checkout input validation                   │
//! │                                                                     │
//! │  goldwok-api errors (separate crate)                                │
//! │  └── ApiError         - Remote call failures                        │
//! │                                                                     │
//! │  goldwok-session errors (separate crate)                            │
//! │  └── SessionError     - Orchestration failures (wraps the above)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the split between errors and outcomes: a rejected entree toggle is
//! a [`crate::selection::Toggle::Rejected`] outcome, not an error; the
//! selection stays valid and the caller may simply ignore it. Errors are
//! reserved for broken preconditions (base choice on a combo without one,
//! finalizing an incomplete selection).

use thiserror::Error;

use crate::catalog::{ComboId, ItemId};
use crate::selection::Missing;

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for core domain failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Combo customization error.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Selection Error
// =============================================================================

/// Broken preconditions during combo customization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// A base choice was offered to a combo whose rule has no base step.
    #[error("combo {combo_id} does not take a base choice")]
    BaseChoiceNotAccepted { combo_id: ComboId },

    /// The chosen item is not one of the combo's base options.
    #[error("item {item_id} is not a base option for combo {combo_id}")]
    NotABaseOption { combo_id: ComboId, item_id: ItemId },

    /// `finalize` was called before the selection was complete. Pricing an
    /// incomplete selection is allowed; only the cart-add path is gated.
    #[error("selection for combo {combo_id} is incomplete: {missing}")]
    Incomplete { combo_id: ComboId, missing: Missing },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for the checkout boundary.
///
/// Used for early validation before an order payload is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed email or phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_error_messages() {
        let err = SelectionError::BaseChoiceNotAccepted {
            combo_id: ComboId(1),
        };
        assert_eq!(err.to_string(), "combo 1 does not take a base choice");

        let err = SelectionError::NotABaseOption {
            combo_id: ComboId(2),
            item_id: ItemId(41),
        };
        assert_eq!(
            err.to_string(),
            "item 41 is not a base option for combo 2"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain at least 10 digits".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "phone has invalid format: must contain at least 10 digits"
        );
    }

    #[test]
    fn test_errors_convert_to_core_error() {
        let selection_err = SelectionError::BaseChoiceNotAccepted {
            combo_id: ComboId(1),
        };
        let core_err: CoreError = selection_err.into();
        assert!(matches!(core_err, CoreError::Selection(_)));

        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
