//! # Products API
//!
//! Catalog reads against the demo store's `/products` endpoints.
//!
//! ## Wire vs. Domain Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Price Conversion Boundary                           │
//! │                                                                     │
//! │  Wire (demo API JSON)            Domain (satchel-core)              │
//! │  ────────────────────            ─────────────────────              │
//! │  RemoteProduct                   Product                            │
//! │    price: 109.95 (f64) ───────►    price_cents: 10995 (i64)        │
//! │                                                                     │
//! │  The float-to-cents conversion happens HERE, exactly once.          │
//! │  Everything downstream is integer arithmetic. The price frozen      │
//! │  into a LineItem at add-to-cart time is never re-validated.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Deserialize;

use satchel_core::types::{Product, Rating};

use crate::client::CatalogClient;
use crate::error::CatalogResult;

// =============================================================================
// Wire Types
// =============================================================================

/// A product as the demo store API serves it.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteProduct {
    pub id: u64,
    pub title: String,
    /// Decimal dollars on the wire.
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    pub rating: Option<RemoteRating>,
}

/// Rating block as served (display only).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RemoteRating {
    pub rate: f64,
    pub count: u32,
}

impl RemoteProduct {
    /// Converts to the domain type, rounding dollars to cents once.
    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            price_cents: dollars_to_cents(self.price),
            description: self.description,
            category: self.category,
            image: self.image,
            rating: self.rating.map(|r| Rating {
                rate: r.rate,
                count: r.count,
            }),
        }
    }
}

/// Decimal dollars → integer cents, rounded to the nearest cent.
///
/// 109.95 → 10995. Negative inputs clamp to zero: the core expects
/// non-negative unit prices.
fn dollars_to_cents(dollars: f64) -> i64 {
    ((dollars * 100.0).round() as i64).max(0)
}

// =============================================================================
// Sort Order
// =============================================================================

/// Sort order accepted by the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn as_query(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

// =============================================================================
// Products API
// =============================================================================

/// Borrow-scoped view over the `/products` endpoints.
pub struct ProductsApi<'a> {
    client: &'a CatalogClient,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a CatalogClient) -> Self {
        ProductsApi { client }
    }

    /// Fetches a single product by id.
    ///
    /// This is the add-to-cart path: the returned price is what gets
    /// frozen into the line item.
    pub async fn get(&self, id: u64) -> CatalogResult<Product> {
        let remote: RemoteProduct = self
            .client
            .get_json(&format!("/products/{id}"), &[])
            .await?;
        Ok(remote.into_product())
    }

    /// Lists products, optionally limited and sorted.
    pub async fn list(
        &self,
        limit: Option<u32>,
        sort: Option<SortOrder>,
    ) -> CatalogResult<Vec<Product>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(sort) = sort {
            query.push(("sort", sort.as_query().to_string()));
        }

        let remote: Vec<RemoteProduct> = self.client.get_json("/products", &query).await?;
        Ok(remote.into_iter().map(RemoteProduct::into_product).collect())
    }

    /// Lists products in one category.
    pub async fn by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        let remote: Vec<RemoteProduct> = self
            .client
            .get_json(&format!("/products/category/{category}"), &[])
            .await?;
        Ok(remote.into_iter().map(RemoteProduct::into_product).collect())
    }

    /// Lists the category names.
    pub async fn categories(&self) -> CatalogResult<Vec<String>> {
        self.client.get_json("/products/categories", &[]).await
    }

    /// Case-insensitive search over title, description, and category.
    ///
    /// The demo API has no search endpoint, so this fetches the full
    /// list and filters client-side, the same trade-off the shipped
    /// mobile app makes.
    pub async fn search(&self, query: &str) -> CatalogResult<Vec<Product>> {
        let needle = query.to_lowercase();
        let all = self.list(None, None).await?;

        Ok(all
            .into_iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
