//! # Validation Module
//!
//! Early input validation for the Satchel storefront.
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
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── Re-checks format before business logic runs                    │
//! │  └── Never trusts the UI layer                                      │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Cart invariants (cart.rs)                                 │
//! │  └── Quantity floor, coupon eligibility, selection gating           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a user-entered coupon code before lookup.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Maximum 20 characters
/// - Alphanumeric only (codes like WELCOME10, FREESHIP)
///
/// ## Returns
/// The trimmed code (normalization to uppercase happens at lookup).
pub fn validate_coupon_code(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "coupon code".to_string(),
        });
    }

    if code.len() > 20 {
        return Err(ValidationError::TooLong {
            field: "coupon code".to_string(),
            max: 20,
        });
    }

    if !code.chars().all(|c| c.is_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "coupon code".to_string(),
            reason: "must contain only letters and numbers".to_string(),
        });
    }

    Ok(code.to_string())
}

/// Validates a shipping address for checkout.
///
/// ## Rules
/// - Must not be blank
/// - Maximum 500 characters
pub fn validate_shipping_address(address: &str) -> ValidationResult<String> {
    let address = address.trim();

    if address.is_empty() {
        return Err(ValidationError::Required {
            field: "shipping address".to_string(),
        });
    }

    if address.len() > 500 {
        return Err(ValidationError::TooLong {
            field: "shipping address".to_string(),
            max: 500,
        });
    }

    Ok(address.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
