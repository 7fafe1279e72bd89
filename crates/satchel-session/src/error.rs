//! # Session Error Type
//!
//! Unified error type for session operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Satchel                            │
//! │                                                                     │
//! │  UI                         Session Layer                           │
//! │  ──                         ─────────────                           │
//! │                                                                     │
//! │  applyCoupon("WELCOME10")                                           │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌──────────────────────────────────────────────────────────────┐   │
//! │  │  CartSession::apply_coupon                                   │   │
//! │  │  Result<CartView, SessionError>                              │   │
//! │  │         │                                                    │   │
//! │  │  ValidationError ──┐                                         │   │
//! │  │  CartError ────────┴──► SessionError { code, message } ────► │   │
//! │  └──────────────────────────────────────────────────────────────┘   │
//! │                                                                     │
//! │  UI switches on `code`, shows `message`:                            │
//! │    MINIMUM_PURCHASE_NOT_MET → "Minimum purchase of $50.00 ..."      │
//! │                                                                     │
//! │  Every failure is recoverable; the cart is never left half-mutated. │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use satchel_core::error::{CartError, ValidationError};

/// Session error surfaced to the UI.
///
/// ## Serialization
/// ```json
/// { "code": "UNKNOWN_COUPON", "message": "Invalid coupon code: BOGUS" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct SessionError {
    /// Machine-readable code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable message for display.
    pub message: String,
}

/// Error codes for session responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await session.applyCoupon(code);
/// } catch (e) {
///   if (e.code === 'MINIMUM_PURCHASE_NOT_MET') highlightSubtotal();
///   showAlert(e.message);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Zero or negative quantity on add
    InvalidQuantity,

    /// Coupon code not in the coupon book
    UnknownCoupon,

    /// Selected subtotal below the coupon threshold
    MinimumPurchaseNotMet,

    /// A different coupon is already active
    CouponAlreadyApplied,

    /// Checkout attempted with nothing selected
    NoItemsSelected,

    /// Malformed input (empty coupon code, blank address, ...)
    ValidationError,
}

impl SessionError {
    /// Creates a new session error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        SessionError {
            code,
            message: message.into(),
        }
    }
}

impl From<CartError> for SessionError {
    fn from(err: CartError) -> Self {
        let code = match &err {
            CartError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            CartError::UnknownCoupon { .. } => ErrorCode::UnknownCoupon,
            CartError::MinimumPurchaseNotMet { .. } => ErrorCode::MinimumPurchaseNotMet,
            CartError::CouponAlreadyApplied { .. } => ErrorCode::CouponAlreadyApplied,
            CartError::NoItemsSelected => ErrorCode::NoItemsSelected,
            CartError::Validation(_) => ErrorCode::ValidationError,
        };
        SessionError::new(code, err.to_string())
    }
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::new(ErrorCode::ValidationError, err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_core::money::Money;

    #[test]
    fn test_cart_error_maps_to_code_and_message() {
        let err: SessionError = CartError::MinimumPurchaseNotMet {
            required: Money::from_cents(5000),
            subtotal: Money::from_cents(2000),
        }
        .into();

        assert_eq!(err.code, ErrorCode::MinimumPurchaseNotMet);
        assert_eq!(
            err.message,
            "Minimum purchase of $50.00 required (subtotal $20.00)"
        );
    }

    #[test]
    fn test_validation_error_maps() {
        let err: SessionError = ValidationError::Required {
            field: "coupon code".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
