//! # Pricing Engine
//!
//! Stateless computation of a `PricingSummary` from the cart's line
//! items, the selection flags, and an optional active coupon.
//!
//! ## The Fixed Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Pricing Pipeline (fixed order)                   │
//! │                                                                     │
//! │  1. subtotal  = Σ selected unit_price × quantity                    │
//! │  2. shipping  = 0 if subtotal == 0                                  │
//! │               = 0 if FreeShipping coupon active                     │
//! │               = flat fee otherwise ($5.99)                          │
//! │  3. discount  = subtotal × pct / 100   (Percentage)                 │
//! │               = fixed value, UNCAPPED  (FixedAmount)                │
//! │               = 0                      (FreeShipping / none)        │
//! │  4. tax       = (subtotal − discount) × rate   (10%)                │
//! │  5. total     = max(0, subtotal + shipping + tax − discount)        │
//! │                                                                     │
//! │  Later steps depend on earlier ones; NO reordering permitted.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known quirks, preserved on purpose
//! - Step 5 subtracts the discount a second time on top of it already
//!   shrinking the tax base in step 4. The compounding is the shipped
//!   behavior of the storefront; recompute compatibility requires
//!   reproducing it exactly, so do not "fix" it here.
//! - A FixedAmount coupon is not capped at the subtotal, so the tax
//!   base (and hence `tax_cents`) can go negative; the `max(0, …)`
//!   clamp on the total masks this downstream.
//!
//! Everything here is a pure function: the engine is re-invoked
//! explicitly after each cart mutation and returns a fresh value, never
//! relying on a UI framework's reactivity.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coupon::{Coupon, CouponKind};
use crate::money::Money;
use crate::types::{LineItem, TaxRate};
use crate::{DEFAULT_SHIPPING_FEE_CENTS, DEFAULT_TAX_RATE_BPS};

// =============================================================================
// Pricing Config
// =============================================================================

/// Store-level pricing knobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Flat shipping fee charged on any non-empty selection.
    pub shipping_fee: Money,

    /// Tax rate applied to the post-discount subtotal.
    pub tax_rate: TaxRate,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            shipping_fee: Money::from_cents(DEFAULT_SHIPPING_FEE_CENTS),
            tax_rate: TaxRate::from_bps(DEFAULT_TAX_RATE_BPS),
        }
    }
}

// =============================================================================
// Pricing Summary
// =============================================================================

/// The derived monetary figures for the currently selected items.
///
/// Never stored, never mutated directly: recomputed from
/// `LineItems + Coupon` on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary {
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,

    /// Count of selected line items (rows, not quantity sum).
    pub selected_item_count: usize,
}

impl PricingSummary {
    /// Summary of an empty (or fully deselected) cart.
    pub fn empty() -> Self {
        PricingSummary {
            subtotal_cents: 0,
            shipping_cents: 0,
            tax_cents: 0,
            discount_cents: 0,
            total_cents: 0,
            selected_item_count: 0,
        }
    }

    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Subtotal over selected items only. Unselected items contribute
/// nothing, regardless of quantity.
pub fn selected_subtotal(items: &[LineItem]) -> Money {
    items
        .iter()
        .filter(|item| item.selected)
        .map(LineItem::line_total)
        .fold(Money::zero(), |acc, line| acc + line)
}

/// Computes the full pricing summary for one pass.
///
/// Pure function of its inputs; see the module docs for the pipeline
/// and the preserved quirks.
///
/// ```rust
/// use satchel_core::pricing::{price_cart, PricingConfig};
/// use satchel_core::types::{ItemOptions, LineItem, Product};
///
/// let product = Product {
///     id: 1,
///     title: "Backpack".into(),
///     price_cents: 1000,
///     description: String::new(),
///     category: "bags".into(),
///     image: String::new(),
///     rating: None,
/// };
/// let mut item = LineItem::from_product(&product, 2, ItemOptions::default());
/// item.selected = true;
///
/// let summary = price_cart(&[item], None, &PricingConfig::default());
/// assert_eq!(summary.subtotal_cents, 2000);
/// assert_eq!(summary.shipping_cents, 599);
/// assert_eq!(summary.tax_cents, 200);
/// assert_eq!(summary.total_cents, 2799);
/// ```
pub fn price_cart(
    items: &[LineItem],
    coupon: Option<&Coupon>,
    config: &PricingConfig,
) -> PricingSummary {
    // Step 1: subtotal over selected items.
    let subtotal = selected_subtotal(items);

    // Step 2: shipping. An empty selection ships nothing; FreeShipping
    // waives the fee outright.
    let free_shipping = matches!(coupon.map(|c| c.kind), Some(CouponKind::FreeShipping));
    let shipping = if subtotal.is_zero() || free_shipping {
        Money::zero()
    } else {
        config.shipping_fee
    };

    // Step 3: discount. FixedAmount is deliberately not capped.
    let discount = match coupon.map(|c| c.kind) {
        Some(CouponKind::Percentage(pct)) => subtotal.percent_of(pct),
        Some(CouponKind::FixedAmount(amount)) => amount,
        Some(CouponKind::FreeShipping) | None => Money::zero(),
    };

    // Step 4: tax on the post-discount base (may be negative).
    let tax = (subtotal - discount).tax_at(config.tax_rate);

    // Step 5: clamped total. The discount lands a second time here,
    // on top of shrinking the tax base above (shipped behavior).
    let total_cents = (subtotal + shipping + tax - discount).cents().max(0);

    let selected_item_count = items.iter().filter(|item| item.selected).count();

    PricingSummary {
        subtotal_cents: subtotal.cents(),
        shipping_cents: shipping.cents(),
        tax_cents: tax.cents(),
        discount_cents: discount.cents(),
        total_cents,
        selected_item_count,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
