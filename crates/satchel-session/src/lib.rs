//! # satchel-session: Application-Facing Cart Session
//!
//! The layer the mobile UI shell drives. It owns the cart state,
//! wires the pricing engine and the coupon book together, and turns
//! every user action into a `CartView` snapshot or a typed error.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Satchel Layers                              │
//! │                                                                     │
//! │  UI shell (screens, buttons)                                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │               satchel-session (THIS CRATE)                  │   │
//! │  │                                                             │   │
//! │  │   ┌──────────────┐  ┌─────────────┐  ┌──────────────────┐  │   │
//! │  │   │ CartSession  │  │  checkout   │  │   StoreConfig    │  │   │
//! │  │   │ (session.rs) │  │(checkout.rs)│  │   (config.rs)    │  │   │
//! │  │   └──────────────┘  └─────────────┘  └──────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  satchel-core  (Cart, pricing engine, coupon book)                  │
//! │                                                                     │
//! │  Products arrive as plain values (from satchel-catalog or tests);   │
//! │  this crate performs no I/O of its own.                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`session`] - `CartSession` + `CartView`, one method per UI action
//! - [`checkout`] - Order placement simulation and `OrderReceipt`
//! - [`config`] - `StoreConfig` and its pricing knobs
//! - [`error`] - `SessionError` with machine-readable codes

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod config;
pub mod error;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use checkout::OrderReceipt;
pub use config::StoreConfig;
pub use error::{ErrorCode, SessionError};
pub use session::{CartSession, CartView, SessionResult};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for the application.
///
/// Respects `RUST_LOG` when set.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=satchel=trace` - Show trace for satchel crates only
/// - Default: INFO level, DEBUG for satchel crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,satchel=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
