//! # satchel-catalog: Demo Store API Client
//!
//! Async client for the public demo store API that originates all
//! catalog data for the Satchel storefront.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Satchel Data Flow                              │
//! │                                                                     │
//! │  UI screen (product detail, home grid)                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                satchel-catalog (THIS CRATE)                 │   │
//! │  │                                                             │   │
//! │  │   ┌───────────────┐   ┌──────────────┐   ┌──────────────┐  │   │
//! │  │   │ CatalogClient │   │ ProductsApi  │   │   AuthApi    │  │   │
//! │  │   │  (client.rs)  │◄──│ (products.rs)│   │  (auth.rs)   │  │   │
//! │  │   │ reqwest pool  │   │ get/list/... │   │    login     │  │   │
//! │  │   └───────────────┘   └──────────────┘   └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  https://fakestoreapi.com  (read-mostly demo service)               │
//! │                                                                     │
//! │  Products cross into satchel-core as plain values; the core         │
//! │  never performs I/O. Prices convert to integer cents HERE.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`client`] - Client construction and shared request plumbing
//! - [`products`] - `/products` endpoints + wire-to-domain conversion
//! - [`auth`] - `/auth/login`
//! - [`error`] - Typed failures categorized by status code
//!
//! ## What this crate deliberately does NOT do
//!
//! - No retries, no caching: the storefront surfaces failures and lets
//!   the user pull-to-refresh
//! - No order placement: the demo API has no real orders endpoint;
//!   checkout is a client-side simulation owned by satchel-session

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod client;
pub mod error;
pub mod products;

// =============================================================================
// Re-exports
// =============================================================================

pub use auth::{AuthApi, LoginRequest, Token};
pub use client::{CatalogClient, CatalogConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{CatalogError, CatalogResult};
pub use products::{ProductsApi, RemoteProduct, SortOrder};
