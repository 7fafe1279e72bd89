//! # Cart Module
//!
//! Authoritative in-memory state for cart contents, per-item selection,
//! and the active coupon.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cart State Operations                         │
//! │                                                                     │
//! │  UI Action                Operation              State Change       │
//! │  ─────────                ─────────              ────────────       │
//! │  Tap "Add to Cart" ─────► add_item() ──────────► dedup by id,       │
//! │                                                  qty += n           │
//! │  Change quantity ───────► update_quantity() ───► qty = n, or        │
//! │                                                  remove at qty < 1  │
//! │  Tap trash icon ────────► remove_item() ───────► row deleted        │
//! │  Tap checkbox ──────────► toggle_selection() ──► selected flipped   │
//! │  "Select All" ──────────► select_all()                              │
//! │  Enter coupon ──────────► apply_coupon() ──────► coupon set +       │
//! │                                                  fresh summary      │
//! │  "Clear All" ───────────► clear() ─────────────► everything reset   │
//! │                                                                     │
//! │  INVARIANT: cart_count == Σ quantity across all items, preserved    │
//! │  by every operation, including aborted ones (all-or-nothing).       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Execution is single-threaded and synchronous: this is client-side UI
//! state, mutated between render passes, so no locking lives here. The
//! embedding application owns the `Cart` and passes it explicitly
//! (no ambient global context).

use serde::Serialize;
use ts_rs::TS;

use crate::coupon::{normalize_code, Coupon, CouponBook};
use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::pricing::{price_cart, selected_subtotal, PricingConfig, PricingSummary};
use crate::types::{ItemOptions, LineItem, Product};

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product again
///   increases quantity)
/// - `quantity >= 1` for every present item (qty < 1 on update removes)
/// - `cart_count` always equals the sum of all item quantities
/// - At most one coupon is active at a time
///
/// Serialize-only: the cart crosses the UI boundary outbound (ts-rs
/// bindings, snapshots). Deserializing an external cart would bypass
/// every mutation path and could smuggle in a `cart_count` out of sync
/// with the quantity sum, so a cart is only ever built through its
/// operations.
#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart, in insertion order.
    items: Vec<LineItem>,

    /// Running total quantity across all items. Kept as an explicit
    /// counter (the storefront header badge reads it constantly) and
    /// adjusted in lockstep with every mutation.
    cart_count: i64,

    /// The active coupon, if any.
    coupon: Option<Coupon>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a product with default display attributes (size "M",
    /// color "Black").
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by `quantity`
    ///   (no upper bound)
    /// - Product not in cart: new unselected item with the price frozen
    /// - `quantity < 1`: rejected with `InvalidQuantity`, cart untouched
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CartResult<()> {
        self.add_item_with_options(product, quantity, ItemOptions::default())
    }

    /// Adds a product with explicit size/color options.
    ///
    /// Options only apply to a freshly created row; adding more of an
    /// existing product keeps the attributes chosen the first time.
    pub fn add_item_with_options(
        &mut self,
        product: &Product,
        quantity: i64,
        options: ItemOptions,
    ) -> CartResult<()> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity {
                requested: quantity,
            });
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
        {
            item.quantity += quantity;
        } else {
            self.items
                .push(LineItem::from_product(product, quantity, options));
        }

        self.cart_count += quantity;
        Ok(())
    }

    /// Removes an item by product ID.
    ///
    /// Idempotent: an absent id is a no-op. The item's selection state
    /// is keyed by the item and vanishes with it.
    pub fn remove_item(&mut self, product_id: u64) {
        if let Some(pos) = self.items.iter().position(|i| i.product_id == product_id) {
            let removed = self.items.remove(pos);
            self.cart_count -= removed.quantity;
        }
    }

    /// Updates an item's quantity.
    ///
    /// ## Behavior
    /// - `quantity < 1`: behaves as `remove_item` (0 and negative alike)
    /// - Absent id: silent no-op
    /// - Otherwise: replaces the quantity and adjusts the counter by
    ///   the delta
    pub fn update_quantity(&mut self, product_id: u64, quantity: i64) {
        if quantity < 1 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            self.cart_count += quantity - item.quantity;
            item.quantity = quantity;
        }
    }

    /// Empties the cart: items, counter, coupon, selection flags.
    pub fn clear(&mut self) {
        self.items.clear();
        self.cart_count = 0;
        self.coupon = None;
    }

    /// Flips the selection flag for one item. No effect on quantity or
    /// price; absent id is a no-op.
    pub fn toggle_selection(&mut self, product_id: u64) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.selected = !item.selected;
        }
    }

    /// Marks every item as participating in checkout.
    pub fn select_all(&mut self) {
        for item in &mut self.items {
            item.selected = true;
        }
    }

    /// Clears every selection flag.
    pub fn deselect_all(&mut self) {
        for item in &mut self.items {
            item.selected = false;
        }
    }

    // -------------------------------------------------------------------------
    // Coupon protocol
    // -------------------------------------------------------------------------

    /// Applies a coupon code.
    ///
    /// ## Protocol
    /// 1. Normalize the code (trim + uppercase)
    /// 2. Reapplying the active code → success no-op
    /// 3. A different coupon active → `CouponAlreadyApplied`
    /// 4. Unknown code → `UnknownCoupon`
    /// 5. Selected subtotal below the threshold (computed with the
    ///    proposed coupon NOT yet applied) → `MinimumPurchaseNotMet`
    /// 6. Success: the coupon becomes active; returns the fresh summary
    ///
    /// Failure leaves the cart (and any active coupon) untouched.
    pub fn apply_coupon(
        &mut self,
        code: &str,
        book: &CouponBook,
        config: &PricingConfig,
    ) -> CartResult<PricingSummary> {
        let code = normalize_code(code);

        if let Some(active) = &self.coupon {
            if active.code == code {
                // Already applied: no state change, current figures.
                return Ok(self.summary(config));
            }
            return Err(CartError::CouponAlreadyApplied {
                active: active.code.clone(),
            });
        }

        let coupon = book
            .lookup(&code)
            .ok_or(CartError::UnknownCoupon { code })?;

        let subtotal = selected_subtotal(&self.items);
        if subtotal < coupon.min_purchase {
            return Err(CartError::MinimumPurchaseNotMet {
                required: coupon.min_purchase,
                subtotal,
            });
        }

        self.coupon = Some(coupon.clone());
        Ok(self.summary(config))
    }

    /// Unconditionally clears the active coupon. Always succeeds.
    pub fn remove_coupon(&mut self) {
        self.coupon = None;
    }

    // -------------------------------------------------------------------------
    // Pricing & checkout
    // -------------------------------------------------------------------------

    /// Recomputes the pricing summary for the current selection.
    pub fn summary(&self, config: &PricingConfig) -> PricingSummary {
        price_cart(&self.items, self.coupon.as_ref(), config)
    }

    /// Gate for the checkout action: at least one item must be
    /// selected. Returns the summary the checkout screen will show.
    pub fn checkout_summary(&self, config: &PricingConfig) -> CartResult<PricingSummary> {
        if self.selected_item_count() == 0 {
            return Err(CartError::NoItemsSelected);
        }
        Ok(self.summary(config))
    }

    // -------------------------------------------------------------------------
    // Queries (pure, no side effects)
    // -------------------------------------------------------------------------

    /// Quantity in cart for a product, or 0 if absent.
    pub fn get_item_count(&self, product_id: u64) -> i64 {
        self.items
            .iter()
            .find(|i| i.product_id == product_id)
            .map(|i| i.quantity)
            .unwrap_or(0)
    }

    /// Presence check.
    pub fn is_in_cart(&self, product_id: u64) -> bool {
        self.items.iter().any(|i| i.product_id == product_id)
    }

    /// Running total quantity (the header badge number).
    #[inline]
    pub fn cart_count(&self) -> i64 {
        self.cart_count
    }

    /// Number of unique line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Count of selected line items (rows, not quantities).
    pub fn selected_item_count(&self) -> usize {
        self.items.iter().filter(|i| i.selected).count()
    }

    /// Subtotal over the selected items.
    pub fn selected_subtotal(&self) -> Money {
        selected_subtotal(&self.items)
    }

    /// The items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The active coupon, if any.
    pub fn coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

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

    fn count_invariant_holds(cart: &Cart) -> bool {
        cart.cart_count() == cart.items().iter().map(|i| i.quantity).sum::<i64>()
    }

    #[test]
    fn test_add_item_dedups_by_id() {
        let mut cart = Cart::new();
        let p = product(1, 999);

        cart.add_item(&p, 2).unwrap();
        cart.add_item(&p, 3).unwrap();

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get_item_count(1), 5);
        assert_eq!(cart.cart_count(), 5);
    }

    #[test]
    fn test_add_item_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 999);

        assert!(matches!(
            cart.add_item(&p, -2),
            Err(CartError::InvalidQuantity { requested: -2 })
        ));
        assert!(cart.add_item(&p, 0).is_err());

        // Aborted operation leaves no trace.
        assert!(cart.is_empty());
        assert_eq!(cart.cart_count(), 0);
    }

    #[test]
    fn test_fresh_items_are_unselected() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 999), 1).unwrap();
        assert_eq!(cart.selected_item_count(), 0);
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 999), 2).unwrap();
        cart.add_item(&product(2, 500), 1).unwrap();

        cart.remove_item(1);
        let after_first = cart.clone();
        cart.remove_item(1);

        assert_eq!(cart.cart_count(), after_first.cart_count());
        assert_eq!(cart.unique_item_count(), after_first.unique_item_count());
        assert_eq!(cart.cart_count(), 1);
        assert!(count_invariant_holds(&cart));
    }

    #[test]
    fn test_update_quantity_adjusts_counter_by_delta() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 999), 2).unwrap();
        cart.add_item(&product(2, 500), 4).unwrap();

        cart.update_quantity(1, 7);
        assert_eq!(cart.get_item_count(1), 7);
        assert_eq!(cart.cart_count(), 11);
        assert!(count_invariant_holds(&cart));
    }

    #[test]
    fn test_update_quantity_to_zero_or_below_removes() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 999), 2).unwrap();
        cart.add_item(&product(2, 500), 3).unwrap();

        cart.update_quantity(1, 0);
        assert!(!cart.is_in_cart(1));

        cart.update_quantity(2, -5);
        assert!(!cart.is_in_cart(2));

        assert_eq!(cart.cart_count(), 0);
        assert!(count_invariant_holds(&cart));
    }

    #[test]
    fn test_update_quantity_absent_id_is_silent_noop() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 999), 2).unwrap();

        cart.update_quantity(42, 5);
        assert_eq!(cart.cart_count(), 2);
        assert!(count_invariant_holds(&cart));
    }

    #[test]
    fn test_count_invariant_over_mixed_sequence() {
        let mut cart = Cart::new();

        cart.add_item(&product(1, 999), 3).unwrap();
        cart.add_item(&product(2, 500), 1).unwrap();
        cart.add_item(&product(1, 999), 2).unwrap();
        cart.update_quantity(2, 6);
        cart.remove_item(1);
        cart.add_item(&product(3, 1250), 4).unwrap();
        cart.update_quantity(3, 0);
        cart.remove_item(99); // absent
        let _ = cart.add_item(&product(4, 100), -1); // rejected

        assert!(count_invariant_holds(&cart));
        assert_eq!(cart.cart_count(), 6);
    }

    #[test]
    fn test_selection_toggle_and_bulk_ops() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 999), 1).unwrap();
        cart.add_item(&product(2, 500), 1).unwrap();

        cart.toggle_selection(1);
        assert_eq!(cart.selected_item_count(), 1);
        cart.toggle_selection(1);
        assert_eq!(cart.selected_item_count(), 0);

        cart.select_all();
        assert_eq!(cart.selected_item_count(), 2);
        cart.deselect_all();
        assert_eq!(cart.selected_item_count(), 0);

        // Selection never touches quantities.
        assert_eq!(cart.cart_count(), 2);
    }

    #[test]
    fn test_removing_selected_item_drops_its_selection() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 999), 1).unwrap();
        cart.toggle_selection(1);
        assert_eq!(cart.selected_item_count(), 1);

        cart.remove_item(1);
        assert_eq!(cart.selected_item_count(), 0);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut cart = Cart::new();
        let book = CouponBook::standard();
        let config = PricingConfig::default();

        cart.add_item(&product(1, 10000), 1).unwrap();
        cart.select_all();
        cart.apply_coupon("SAVE20", &book, &config).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.cart_count(), 0);
        assert!(cart.coupon().is_none());
    }

    // -------------------------------------------------------------------------
    // Coupon protocol
    // -------------------------------------------------------------------------

    #[test]
    fn test_apply_coupon_below_minimum_fails() {
        // Scenario: $10.00 × 2 selected, WELCOME10 needs $50.00.
        let mut cart = Cart::new();
        let book = CouponBook::standard();
        let config = PricingConfig::default();

        cart.add_item(&product(1, 1000), 2).unwrap();
        cart.select_all();

        let err = cart.apply_coupon("WELCOME10", &book, &config).unwrap_err();
        assert!(matches!(err, CartError::MinimumPurchaseNotMet { .. }));
        assert!(cart.coupon().is_none());
    }

    #[test]
    fn test_minimum_counts_selected_items_only() {
        let mut cart = Cart::new();
        let book = CouponBook::standard();
        let config = PricingConfig::default();

        // $120.00 in cart, but nothing selected: subtotal is 0.
        cart.add_item(&product(1, 12000), 1).unwrap();
        assert!(cart.apply_coupon("WELCOME10", &book, &config).is_err());

        cart.select_all();
        assert!(cart.apply_coupon("WELCOME10", &book, &config).is_ok());
    }

    #[test]
    fn test_apply_unknown_coupon() {
        let mut cart = Cart::new();
        let err = cart
            .apply_coupon("NOPE", &CouponBook::standard(), &PricingConfig::default())
            .unwrap_err();
        assert!(matches!(err, CartError::UnknownCoupon { .. }));
    }

    #[test]
    fn test_reapply_same_code_is_noop() {
        let mut cart = Cart::new();
        let book = CouponBook::standard();
        let config = PricingConfig::default();

        cart.add_item(&product(1, 10000), 1).unwrap();
        cart.select_all();

        let first = cart.apply_coupon("SAVE20", &book, &config).unwrap();
        // Different casing, same coupon: success, identical figures.
        let second = cart.apply_coupon("save20", &book, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_applying_second_coupon_is_rejected() {
        let mut cart = Cart::new();
        let book = CouponBook::standard();
        let config = PricingConfig::default();

        cart.add_item(&product(1, 10000), 1).unwrap();
        cart.select_all();
        cart.apply_coupon("SAVE20", &book, &config).unwrap();

        let err = cart.apply_coupon("FREESHIP", &book, &config).unwrap_err();
        assert!(matches!(
            err,
            CartError::CouponAlreadyApplied { ref active } if active == "SAVE20"
        ));
        // The original coupon survives the rejection.
        assert_eq!(cart.coupon().unwrap().code, "SAVE20");
    }

    #[test]
    fn test_remove_coupon_then_reapply() {
        let mut cart = Cart::new();
        let book = CouponBook::standard();
        let config = PricingConfig::default();

        cart.add_item(&product(1, 10000), 1).unwrap();
        cart.select_all();
        cart.apply_coupon("SAVE20", &book, &config).unwrap();

        cart.remove_coupon();
        assert!(cart.coupon().is_none());

        let summary = cart.apply_coupon("FREESHIP", &book, &config).unwrap();
        assert_eq!(summary.shipping_cents, 0);
    }

    #[test]
    fn test_cart_serializes_outbound_only() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 1000), 2).unwrap();

        // Outbound snapshot for the UI: camelCase keys, counter included.
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["cartCount"], 2);
        assert_eq!(json["items"][0]["productId"], 1);
        // No inbound path: Cart does not implement Deserialize, so a
        // cart is only ever built through its operations.
    }

    // -------------------------------------------------------------------------
    // Checkout gating
    // -------------------------------------------------------------------------

    #[test]
    fn test_checkout_requires_selection() {
        let mut cart = Cart::new();
        let config = PricingConfig::default();

        cart.add_item(&product(1, 1000), 2).unwrap();

        let err = cart.checkout_summary(&config).unwrap_err();
        assert_eq!(err, CartError::NoItemsSelected);
        // Cart untouched by the failed gate.
        assert_eq!(cart.cart_count(), 2);

        cart.select_all();
        let summary = cart.checkout_summary(&config).unwrap();
        assert_eq!(summary.total_cents, 2799);
    }
}
