//! # Cart Session
//!
//! The object the UI shell holds for the lifetime of the app. It owns
//! the cart, the coupon book, and the store configuration, and exposes
//! one method per user-visible cart action.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Session Command Flow                          │
//! │                                                                     │
//! │  UI event          Session method          Returns                  │
//! │  ────────          ──────────────          ───────                  │
//! │  add to cart ────► add_to_cart() ────────► CartView                 │
//! │  qty stepper ────► update_item() ────────► CartView                 │
//! │  trash icon ─────► remove_item() ────────► CartView                 │
//! │  checkbox ───────► toggle_item() ────────► CartView                 │
//! │  coupon entry ───► apply_coupon() ───────► CartView | SessionError  │
//! │  place order ────► checkout() ───────────► OrderReceipt | error     │
//! │                                                                     │
//! │  Every mutation returns a full CartView snapshot; the UI renders    │
//! │  from the value, never from shared mutable state.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use satchel_core::cart::Cart;
use satchel_core::coupon::{Coupon, CouponBook};
use satchel_core::error::CartError;
use satchel_core::pricing::PricingSummary;
use satchel_core::types::{ItemOptions, LineItem, Product};
use satchel_core::validation::validate_coupon_code;

use crate::config::StoreConfig;
use crate::error::SessionError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

// =============================================================================
// Cart View
// =============================================================================

/// Snapshot of the cart handed to the UI after every operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// All line items, in insertion order.
    pub items: Vec<LineItem>,

    /// Pricing figures for the current selection and coupon.
    pub summary: PricingSummary,

    /// Total quantity across all items (the header badge).
    pub cart_count: i64,

    /// Code of the active coupon, if any.
    pub coupon_code: Option<String>,
}

// =============================================================================
// Cart Session
// =============================================================================

/// Long-lived session owning all cart state.
///
/// Constructed once at app startup and passed to call sites by the
/// embedding application. Single-threaded by design: cart state is UI
/// state, mutated between render passes.
pub struct CartSession {
    cart: Cart,
    coupons: CouponBook,
    config: StoreConfig,
}

impl CartSession {
    /// Creates a session with the standard coupon book.
    pub fn new(config: StoreConfig) -> Self {
        CartSession {
            cart: Cart::new(),
            coupons: CouponBook::standard(),
            config,
        }
    }

    /// Creates a session with a custom coupon book.
    pub fn with_coupons(config: StoreConfig, coupons: CouponBook) -> Self {
        CartSession {
            cart: Cart::new(),
            coupons,
            config,
        }
    }

    // -------------------------------------------------------------------------
    // Item mutations
    // -------------------------------------------------------------------------

    /// Adds a product with default display attributes.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> SessionResult<CartView> {
        debug!(product_id = product.id, quantity, "Adding item to cart");
        self.cart.add_item(product, quantity)?;
        Ok(self.view())
    }

    /// Adds a product with explicit size/color options.
    pub fn add_to_cart_with_options(
        &mut self,
        product: &Product,
        quantity: i64,
        options: ItemOptions,
    ) -> SessionResult<CartView> {
        debug!(product_id = product.id, quantity, "Adding item to cart");
        self.cart.add_item_with_options(product, quantity, options)?;
        Ok(self.view())
    }

    /// Sets an item's quantity. Quantities below 1 remove the item.
    pub fn update_item(&mut self, product_id: u64, quantity: i64) -> CartView {
        debug!(product_id, quantity, "Updating item quantity");
        self.cart.update_quantity(product_id, quantity);
        self.view()
    }

    /// Removes an item. Idempotent.
    pub fn remove_item(&mut self, product_id: u64) -> CartView {
        debug!(product_id, "Removing item from cart");
        self.cart.remove_item(product_id);
        self.view()
    }

    /// Empties the cart entirely.
    pub fn clear(&mut self) -> CartView {
        debug!("Clearing cart");
        self.cart.clear();
        self.view()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Flips one item's checkout participation.
    pub fn toggle_item(&mut self, product_id: u64) -> CartView {
        self.cart.toggle_selection(product_id);
        self.view()
    }

    /// Selects every item for checkout.
    pub fn select_all(&mut self) -> CartView {
        self.cart.select_all();
        self.view()
    }

    /// Deselects every item.
    pub fn deselect_all(&mut self) -> CartView {
        self.cart.deselect_all();
        self.view()
    }

    // -------------------------------------------------------------------------
    // Coupons
    // -------------------------------------------------------------------------

    /// Applies a coupon code typed by the user.
    ///
    /// Input is validated (non-empty, sane length, alphanumeric) before
    /// the cart's coupon protocol runs. Failure leaves everything as it
    /// was.
    pub fn apply_coupon(&mut self, code: &str) -> SessionResult<CartView> {
        let code = validate_coupon_code(code)?;
        debug!(code = %code, "Applying coupon");

        match self
            .cart
            .apply_coupon(&code, &self.coupons, &self.config.pricing_config())
        {
            Ok(_) => Ok(self.view()),
            Err(err) => {
                debug!(code = %code, error = %err, "Coupon rejected");
                Err(err.into())
            }
        }
    }

    /// Clears the active coupon. Always succeeds.
    pub fn remove_coupon(&mut self) -> CartView {
        debug!("Removing coupon");
        self.cart.remove_coupon();
        self.view()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Current snapshot without mutating anything.
    pub fn view(&self) -> CartView {
        CartView {
            items: self.cart.items().to_vec(),
            summary: self.cart.summary(&self.config.pricing_config()),
            cart_count: self.cart.cart_count(),
            coupon_code: self.cart.coupon().map(|c| c.code.clone()),
        }
    }

    /// The header badge number.
    pub fn cart_count(&self) -> i64 {
        self.cart.cart_count()
    }

    /// Whether a product is in the cart.
    pub fn is_in_cart(&self, product_id: u64) -> bool {
        self.cart.is_in_cart(product_id)
    }

    /// Quantity in cart for a product, or 0.
    pub fn item_quantity(&self, product_id: u64) -> i64 {
        self.cart.get_item_count(product_id)
    }

    /// The active coupon, if any.
    pub fn applied_coupon(&self) -> Option<&Coupon> {
        self.cart.coupon()
    }

    /// The store configuration this session was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub(crate) fn cart(&self) -> &Cart {
        &self.cart
    }

    pub(crate) fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub(crate) fn checkout_gate(&self) -> Result<PricingSummary, CartError> {
        self.cart.checkout_summary(&self.config.pricing_config())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn product(id: u64, price_cents: i64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price_cents,
            description: String::new(),
            category: "test".to_string(),
            image: String::new(),
            rating: None,
        }
    }

    fn session() -> CartSession {
        CartSession::new(StoreConfig::default())
    }

    #[test]
    fn test_add_returns_fresh_view() {
        let mut s = session();
        let view = s.add_to_cart(&product(1, 1000), 2).unwrap();

        assert_eq!(view.cart_count, 2);
        assert_eq!(view.items.len(), 1);
        // Nothing selected yet, so the summary is all zeros.
        assert_eq!(view.summary.subtotal_cents, 0);
    }

    #[test]
    fn test_add_invalid_quantity_surfaces_code() {
        let mut s = session();
        let err = s.add_to_cart(&product(1, 1000), 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert_eq!(s.cart_count(), 0);
    }

    #[test]
    fn test_view_prices_selection() {
        let mut s = session();
        s.add_to_cart(&product(1, 1000), 2).unwrap();
        let view = s.select_all();

        assert_eq!(view.summary.subtotal_cents, 2000);
        assert_eq!(view.summary.shipping_cents, 599);
        assert_eq!(view.summary.tax_cents, 200);
        assert_eq!(view.summary.total_cents, 2799);
    }

    #[test]
    fn test_coupon_flow_through_session() {
        let mut s = session();
        s.add_to_cart(&product(1, 10000), 1).unwrap();
        s.select_all();

        let view = s.apply_coupon("  save20  ").unwrap();
        assert_eq!(view.coupon_code.as_deref(), Some("SAVE20"));
        assert_eq!(view.summary.discount_cents, 2000);
        assert_eq!(view.summary.total_cents, 9399);

        let view = s.remove_coupon();
        assert!(view.coupon_code.is_none());
        assert_eq!(view.summary.discount_cents, 0);
    }

    #[test]
    fn test_apply_coupon_rejects_blank_input() {
        let mut s = session();
        let err = s.apply_coupon("   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_apply_coupon_below_minimum() {
        let mut s = session();
        s.add_to_cart(&product(1, 2000), 1).unwrap();
        s.select_all();

        let err = s.apply_coupon("WELCOME10").unwrap_err();
        assert_eq!(err.code, ErrorCode::MinimumPurchaseNotMet);
        assert!(s.applied_coupon().is_none());
    }

    #[test]
    fn test_update_and_remove_reflect_in_view() {
        let mut s = session();
        s.add_to_cart(&product(1, 1000), 2).unwrap();
        s.add_to_cart(&product(2, 500), 1).unwrap();

        let view = s.update_item(1, 5);
        assert_eq!(view.cart_count, 6);

        let view = s.remove_item(2);
        assert_eq!(view.cart_count, 5);
        assert!(!s.is_in_cart(2));
        assert_eq!(s.item_quantity(1), 5);
    }

    #[test]
    fn test_clear_resets_view() {
        let mut s = session();
        s.add_to_cart(&product(1, 10000), 1).unwrap();
        s.select_all();
        s.apply_coupon("SAVE20").unwrap();

        let view = s.clear();
        assert!(view.items.is_empty());
        assert_eq!(view.cart_count, 0);
        assert!(view.coupon_code.is_none());
        assert_eq!(view.summary.total_cents, 0);
    }
}
