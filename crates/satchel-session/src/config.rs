//! # Store Configuration
//!
//! Store-level settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Values supplied by the embedding application
//! 2. Defaults (this file)
//!
//! Configuration is read-only after the session is constructed; there
//! is no hot-reload path.

use serde::{Deserialize, Serialize};

use satchel_core::money::Money;
use satchel_core::pricing::PricingConfig;
use satchel_core::types::TaxRate;
use satchel_core::{DEFAULT_SHIPPING_FEE_CENTS, DEFAULT_TAX_RATE_BPS};

/// Store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name (displayed in the header and on receipts).
    pub store_name: String,

    /// Currency symbol (for display only; all math is in cents).
    pub currency_symbol: String,

    /// Flat shipping fee in cents.
    pub shipping_fee_cents: i64,

    /// Tax rate in basis points (1000 = 10%).
    pub tax_rate_bps: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Satchel".to_string(),
            currency_symbol: "$".to_string(),
            shipping_fee_cents: DEFAULT_SHIPPING_FEE_CENTS,
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
        }
    }
}

impl StoreConfig {
    /// The pricing knobs the engine consumes.
    pub fn pricing_config(&self) -> PricingConfig {
        PricingConfig {
            shipping_fee: Money::from_cents(self.shipping_fee_cents),
            tax_rate: TaxRate::from_bps(self.tax_rate_bps),
        }
    }
}
