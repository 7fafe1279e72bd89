//! # Checkout
//!
//! Client-side order placement. The demo store API has no real orders
//! endpoint, so checkout produces a local receipt and resets the
//! transient cart state.
//!
//! ## Post-Order State
//! Items stay in the cart after a successful order; only the selection
//! flags and the active coupon are cleared. The storefront treats the
//! cart as a wishlist the user keeps curating between orders.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use satchel_core::pricing::PricingSummary;
use satchel_core::types::LineItem;
use satchel_core::validation::validate_shipping_address;

use crate::error::SessionError;
use crate::session::{CartSession, SessionResult};

// =============================================================================
// Order Receipt
// =============================================================================

/// Record of a placed order, handed to the confirmation screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// Locally generated order identifier.
    pub order_id: Uuid,

    /// When the order was placed.
    pub placed_at: DateTime<Utc>,

    /// Shipping address exactly as entered (trimmed).
    pub shipping_address: String,

    /// Snapshot of the line items that were purchased.
    pub lines: Vec<LineItem>,

    /// The figures the buyer confirmed.
    pub summary: PricingSummary,
}

impl CartSession {
    /// Places an order for the currently selected items.
    ///
    /// ## Sequence
    /// 1. Validate the shipping address (non-blank, sane length)
    /// 2. Gate on selection: nothing selected → `NoItemsSelected`
    /// 3. Snapshot the selected lines and the confirmed summary
    /// 4. Clear selection flags and the active coupon
    ///
    /// Unselected items survive untouched. Any failure before step 4
    /// leaves the cart exactly as it was.
    pub fn checkout(&mut self, shipping_address: &str) -> SessionResult<OrderReceipt> {
        let address = validate_shipping_address(shipping_address)?;

        let summary = self.checkout_gate().map_err(SessionError::from)?;

        let lines: Vec<LineItem> = self
            .cart()
            .items()
            .iter()
            .filter(|item| item.selected)
            .cloned()
            .collect();

        let receipt = OrderReceipt {
            order_id: Uuid::new_v4(),
            placed_at: Utc::now(),
            shipping_address: address,
            lines,
            summary,
        };

        self.cart_mut().deselect_all();
        self.cart_mut().remove_coupon();

        info!(
            order_id = %receipt.order_id,
            total_cents = receipt.summary.total_cents,
            line_count = receipt.lines.len(),
            "Order placed"
        );

        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::error::ErrorCode;
    use satchel_core::types::Product;

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
    fn test_checkout_requires_selection() {
        let mut s = session();
        s.add_to_cart(&product(1, 1000), 2).unwrap();

        let err = s.checkout("221B Baker Street").unwrap_err();
        assert_eq!(err.code, ErrorCode::NoItemsSelected);
        // Failed checkout changes nothing.
        assert_eq!(s.cart_count(), 2);
    }

    #[test]
    fn test_checkout_rejects_blank_address() {
        let mut s = session();
        s.add_to_cart(&product(1, 1000), 2).unwrap();
        s.select_all();

        let err = s.checkout("   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        // Gate never ran, selection intact.
        assert_eq!(s.view().summary.selected_item_count, 1);
    }

    #[test]
    fn test_checkout_snapshots_selected_lines_only() {
        let mut s = session();
        s.add_to_cart(&product(1, 1000), 2).unwrap();
        s.add_to_cart(&product(2, 5000), 1).unwrap();
        s.toggle_item(1);

        let receipt = s.checkout("221B Baker Street").unwrap();
        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.lines[0].product_id, 1);
        assert_eq!(receipt.summary.subtotal_cents, 2000);
        assert_eq!(receipt.summary.total_cents, 2799);
        assert_eq!(receipt.shipping_address, "221B Baker Street");
    }

    #[test]
    fn test_checkout_keeps_items_clears_selection_and_coupon() {
        let mut s = session();
        s.add_to_cart(&product(1, 10000), 1).unwrap();
        s.select_all();
        s.apply_coupon("SAVE20").unwrap();

        let receipt = s.checkout("221B Baker Street").unwrap();
        assert_eq!(receipt.summary.discount_cents, 2000);
        assert_eq!(receipt.summary.total_cents, 9399);

        // Items remain; selection and coupon are reset.
        assert_eq!(s.cart_count(), 1);
        assert!(s.applied_coupon().is_none());
        let view = s.view();
        assert_eq!(view.summary.selected_item_count, 0);
        assert_eq!(view.summary.total_cents, 0);
    }

    #[test]
    fn test_receipts_get_distinct_order_ids() {
        let mut s = session();
        s.add_to_cart(&product(1, 1000), 1).unwrap();
        s.select_all();
        let first = s.checkout("somewhere").unwrap();

        s.select_all();
        let second = s.checkout("somewhere").unwrap();

        assert_ne!(first.order_id, second.order_id);
    }
}
