//! # Coupon Module
//!
//! Coupon policies and the store's coupon table.
//!
//! ## Coupon Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Coupon Application                           │
//! │                                                                     │
//! │  User enters code ──► normalize (trim + UPPERCASE)                  │
//! │        │                                                            │
//! │        ├── same code already active? ──► success no-op              │
//! │        ├── different coupon active?  ──► CouponAlreadyApplied       │
//! │        ├── not in the coupon book?   ──► UnknownCoupon              │
//! │        ├── selected subtotal < min?  ──► MinimumPurchaseNotMet      │
//! │        │                                                            │
//! │        └── OK ──► coupon becomes active, summary recomputed         │
//! │                                                                     │
//! │  At most ONE coupon is active at a time. Stacking is rejected       │
//! │  explicitly: remove the active coupon first, then apply.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Coupon Kind
// =============================================================================

/// What a coupon does to the pricing pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum CouponKind {
    /// Percentage off the selected subtotal (value in percentage points).
    Percentage(u32),

    /// Fixed amount off. NOT capped at the subtotal; an oversized
    /// coupon drives the tax base negative (shipped behavior).
    FixedAmount(Money),

    /// Waives the flat shipping fee; no direct discount amount.
    FreeShipping,
}

// =============================================================================
// Coupon
// =============================================================================

/// A named discount policy with an eligibility threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Normalized (uppercase) code.
    pub code: String,

    /// Discount behavior.
    pub kind: CouponKind,

    /// Minimum subtotal over *selected* items required for acceptance.
    pub min_purchase: Money,
}

impl Coupon {
    /// Human-readable description for the "applied coupon" badge.
    ///
    /// ```rust
    /// use satchel_core::coupon::CouponBook;
    ///
    /// let book = CouponBook::standard();
    /// assert_eq!(book.lookup("welcome10").unwrap().describe(), "10% off");
    /// ```
    pub fn describe(&self) -> String {
        match self.kind {
            CouponKind::Percentage(pct) => format!("{}% off", pct),
            CouponKind::FixedAmount(amount) => format!("{} off", amount),
            CouponKind::FreeShipping => "Free Shipping".to_string(),
        }
    }
}

// =============================================================================
// Coupon Book
// =============================================================================

/// The store's coupon table, keyed by normalized code.
///
/// The set is static for the lifetime of the app (the demo store has no
/// coupon endpoint), but the book is an explicit value so tests and
/// future backends can swap it out.
#[derive(Debug, Clone, Default)]
pub struct CouponBook {
    coupons: HashMap<String, Coupon>,
}

/// Normalizes user-entered coupon codes: trimmed, uppercased.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

impl CouponBook {
    /// Creates an empty coupon book.
    pub fn new() -> Self {
        CouponBook {
            coupons: HashMap::new(),
        }
    }

    /// The storefront's standard coupons.
    ///
    /// | code      | kind             | min purchase |
    /// |-----------|------------------|--------------|
    /// | WELCOME10 | 10% off          | $50.00       |
    /// | SAVE20    | 20% off          | $100.00      |
    /// | FLAT50    | $50.00 off       | $200.00      |
    /// | FREESHIP  | free shipping    | none         |
    pub fn standard() -> Self {
        let mut book = CouponBook::new();
        book.insert(Coupon {
            code: "WELCOME10".to_string(),
            kind: CouponKind::Percentage(10),
            min_purchase: Money::from_cents(5000),
        });
        book.insert(Coupon {
            code: "SAVE20".to_string(),
            kind: CouponKind::Percentage(20),
            min_purchase: Money::from_cents(10000),
        });
        book.insert(Coupon {
            code: "FLAT50".to_string(),
            kind: CouponKind::FixedAmount(Money::from_cents(5000)),
            min_purchase: Money::from_cents(20000),
        });
        book.insert(Coupon {
            code: "FREESHIP".to_string(),
            kind: CouponKind::FreeShipping,
            min_purchase: Money::zero(),
        });
        book
    }

    /// Adds a coupon, normalizing its code.
    pub fn insert(&mut self, mut coupon: Coupon) {
        coupon.code = normalize_code(&coupon.code);
        self.coupons.insert(coupon.code.clone(), coupon);
    }

    /// Looks up a coupon by code (case-insensitive).
    pub fn lookup(&self, code: &str) -> Option<&Coupon> {
        self.coupons.get(&normalize_code(code))
    }

    /// Number of coupons in the book.
    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    /// Checks if the book is empty.
    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
