//! # Domain Types
//!
//! Core domain types for the Satchel storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │    LineItem     │   │    TaxRate      │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (u64)       │   │  product_id     │   │  bps (u32)      │   │
//! │  │  title          │   │  unit_price ❄   │   │  1000 = 10%     │   │
//! │  │  price_cents    │   │  quantity       │   └─────────────────┘   │
//! │  │  category       │   │  selected       │                         │
//! │  │  image          │   │  size / color   │   ❄ = frozen at         │
//! │  └─────────────────┘   └─────────────────┘       add-to-cart time  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Freezing
//! A `LineItem` snapshots the product price at add-to-cart time. If the
//! catalog price changes afterwards, the cart keeps the original price
//! until the item is removed and re-added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{DEFAULT_ITEM_COLOR, DEFAULT_ITEM_SIZE};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10.00% (the storefront's flat tax rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product from the store catalog.
///
/// This is the shape the cart consumes at add-to-cart time. The catalog
/// crate converts the wire representation (decimal-dollar prices) into
/// this type exactly once, at the API boundary.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier. Unique key within the cart; adding a product
    /// already present increments its quantity instead of duplicating.
    pub id: u64,

    /// Display title shown in cart rows and on the receipt.
    pub title: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Longer description for the detail screen.
    pub description: String,

    /// Category name ("electronics", "jewelery", ...).
    pub category: String,

    /// Image URL for UI display only.
    pub image: String,

    /// Average rating, if the catalog provides one.
    pub rating: Option<Rating>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Catalog rating (display only, never used in pricing).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

// =============================================================================
// Line Item
// =============================================================================

/// Display options chosen (or defaulted) when adding a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemOptions {
    /// Size variant. Defaults to "M" when not supplied.
    pub size: Option<String>,

    /// Color variant. Defaults to "Black" when not supplied.
    pub color: Option<String>,
}

/// One product entry in the cart.
///
/// ## Invariants
/// - `quantity >= 1` while the item is present; an update to 0 or below
///   removes the item instead
/// - `selected` is independent of quantity: it only controls whether
///   the item participates in the current checkout pricing pass
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product ID (the dedup key within the cart).
    pub product_id: u64,

    /// Title at time of adding (frozen).
    pub title: String,

    /// Image URL at time of adding (frozen, display only).
    pub image: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart.
    pub quantity: i64,

    /// Size attribute (display only).
    pub size: String,

    /// Color attribute (display only).
    pub color: String,

    /// Whether this item participates in the checkout computation.
    pub selected: bool,

    /// When this item was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line item from a product.
    ///
    /// Fresh items are never pre-selected; selection is a separate,
    /// explicit user action.
    pub fn from_product(product: &Product, quantity: i64, options: ItemOptions) -> Self {
        LineItem {
            product_id: product.id,
            title: product.title.clone(),
            image: product.image.clone(),
            unit_price_cents: product.price_cents,
            quantity,
            size: options.size.unwrap_or_else(|| DEFAULT_ITEM_SIZE.to_string()),
            color: options
                .color
                .unwrap_or_else(|| DEFAULT_ITEM_COLOR.to_string()),
            selected: false,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> Product {
        Product {
            id: 7,
            title: "Mens Casual Shirt".to_string(),
            price_cents: 1599,
            description: "A shirt".to_string(),
            category: "men's clothing".to_string(),
            image: "https://example.invalid/shirt.png".to_string(),
            rating: None,
        }
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!((rate.percentage() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        assert_eq!(TaxRate::from_percentage(10.0).bps(), 1000);
    }

    #[test]
    fn test_line_item_defaults() {
        let item = LineItem::from_product(&shirt(), 2, ItemOptions::default());
        assert_eq!(item.size, "M");
        assert_eq!(item.color, "Black");
        assert!(!item.selected);
        assert_eq!(item.line_total().cents(), 3198);
    }

    #[test]
    fn test_line_item_with_options() {
        let options = ItemOptions {
            size: Some("XL".to_string()),
            color: None,
        };
        let item = LineItem::from_product(&shirt(), 1, options);
        assert_eq!(item.size, "XL");
        assert_eq!(item.color, "Black");
    }
}
