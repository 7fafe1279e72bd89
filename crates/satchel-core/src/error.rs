//! # Error Types
//!
//! Domain-specific error types for satchel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  satchel-core errors (this file)                                    │
//! │  ├── CartError        - Cart and coupon rule violations             │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  satchel-catalog errors (separate crate)                            │
//! │  └── CatalogError     - Remote store API failures                   │
//! │                                                                     │
//! │  satchel-session errors (separate crate)                            │
//! │  └── SessionError     - What the UI sees (serialized)               │
//! │                                                                     │
//! │  Flow: ValidationError → CartError → SessionError → UI message      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (code, amounts, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every error is locally recoverable: the cart is left untouched
//!    on failure, and `cart_count` never drifts from the quantity sum

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart and coupon business rule violations.
///
/// Each variant maps to a user-facing message; none of them is fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    /// Quantity would break the `quantity >= 1` line-item invariant.
    ///
    /// ## When This Occurs
    /// - `add_item` called with zero or negative quantity
    #[error("Invalid quantity: {requested}")]
    InvalidQuantity { requested: i64 },

    /// Coupon code not found in the coupon book.
    #[error("Invalid coupon code: {code}")]
    UnknownCoupon { code: String },

    /// Selected-items subtotal is below the coupon's threshold.
    ///
    /// ## When This Occurs
    /// - Applying WELCOME10 (min $50.00) with $20.00 selected
    /// - Deselecting items can also push an eligible cart below the bar
    #[error("Minimum purchase of {required} required (subtotal {subtotal})")]
    MinimumPurchaseNotMet { required: Money, subtotal: Money },

    /// A different coupon is already active.
    ///
    /// Stacking is rejected explicitly; the caller must remove the
    /// active coupon first.
    #[error("Coupon {active} is already applied; remove it first")]
    CouponAlreadyApplied { active: String },

    /// Checkout requested with nothing selected.
    #[error("Please select at least one item to checkout")]
    NoItemsSelected,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements, checked
/// before any business logic runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., bad characters in a coupon code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CartError::MinimumPurchaseNotMet {
            required: Money::from_cents(5000),
            subtotal: Money::from_cents(2000),
        };
        assert_eq!(
            err.to_string(),
            "Minimum purchase of $50.00 required (subtotal $20.00)"
        );

        let err = CartError::UnknownCoupon {
            code: "BOGUS".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid coupon code: BOGUS");
    }

    #[test]
    fn test_validation_converts_to_cart_error() {
        let validation_err = ValidationError::Required {
            field: "address".to_string(),
        };
        let cart_err: CartError = validation_err.into();
        assert!(matches!(cart_err, CartError::Validation(_)));
    }
}
