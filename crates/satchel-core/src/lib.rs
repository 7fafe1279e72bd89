//! # satchel-core: Pure Business Logic for the Satchel Storefront
//!
//! This crate is the **heart** of Satchel. It contains the cart and
//! pricing logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Satchel Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 Mobile UI (React Native shell)              │   │
//! │  │   Home ──► Product Detail ──► Cart ──► Checkout Modal       │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │                    satchel-session                          │   │
//! │  │    CartSession: add_to_cart, apply_coupon, checkout, ...    │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │              ★ satchel-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌───────┐ │   │
//! │  │  │  money  │ │  cart   │ │ pricing │ │ coupon  │ │ types │ │   │
//! │  │  │  Money  │ │  Cart   │ │ engine  │ │  book   │ │ Item  │ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └───────┘ │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO NETWORK • PURE FUNCTIONS                       │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │                                                                     │
//! │  (satchel-catalog talks to the demo store API; the core never       │
//! │   sees the network, products arrive as plain values)                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cent arithmetic (no floats!)
//! - [`types`] - Domain types (Product, LineItem, TaxRate)
//! - [`cart`] - Cart state: items, selection, running counter, coupon
//! - [`coupon`] - Coupon policies and the store's coupon book
//! - [`pricing`] - The pricing engine (subtotal/shipping/tax/discount)
//! - [`error`] - Domain error types
//! - [`validation`] - Early input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: the pricing engine is deterministic (same
//!    items + coupon + config, same summary)
//! 2. **No I/O**: network and storage access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64)
//! 4. **Explicit Errors**: typed enums, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use satchel_core::cart::Cart;
//! use satchel_core::coupon::CouponBook;
//! use satchel_core::pricing::PricingConfig;
//! use satchel_core::types::Product;
//!
//! let product = Product {
//!     id: 1,
//!     title: "Fjallraven Backpack".into(),
//!     price_cents: 10995,
//!     description: String::new(),
//!     category: "men's clothing".into(),
//!     image: String::new(),
//!     rating: None,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&product, 1)?;
//! cart.select_all();
//!
//! let summary = cart.summary(&PricingConfig::default());
//! assert_eq!(summary.subtotal_cents, 10995);
//! # Ok::<(), satchel_core::error::CartError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod coupon;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use satchel_core::Money` instead of
// `use satchel_core::money::Money`

pub use cart::Cart;
pub use coupon::{Coupon, CouponBook, CouponKind};
pub use error::{CartError, CartResult, ValidationError};
pub use money::Money;
pub use pricing::{price_cart, PricingConfig, PricingSummary};
pub use types::{ItemOptions, LineItem, Product, Rating, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat shipping fee in cents, charged on any non-empty selection
/// unless a FreeShipping coupon is active.
pub const DEFAULT_SHIPPING_FEE_CENTS: i64 = 599;

/// Flat storefront tax rate in basis points (1000 = 10%), applied to
/// the post-discount subtotal.
pub const DEFAULT_TAX_RATE_BPS: u32 = 1000;

/// Default size attribute for items added without explicit options.
pub const DEFAULT_ITEM_SIZE: &str = "M";

/// Default color attribute for items added without explicit options.
pub const DEFAULT_ITEM_COLOR: &str = "Black";
