//! Integration tests against the live demo store API.
//!
//! Ignored by default: they need network access and the demo service
//! is occasionally slow or down. Run explicitly with
//! `cargo test -p satchel-catalog -- --ignored`.

use satchel_catalog::{CatalogClient, CatalogConfig, SortOrder};

fn client() -> CatalogClient {
    CatalogClient::new(CatalogConfig::default()).expect("client builds")
}

#[tokio::test]
#[ignore]
async fn fetches_a_known_product() {
    let product = client().products().get(1).await.expect("product 1 exists");

    assert_eq!(product.id, 1);
    assert!(!product.title.is_empty());
    assert!(product.price_cents > 0);
}

#[tokio::test]
#[ignore]
async fn lists_with_limit_and_sort() {
    let products = client()
        .products()
        .list(Some(5), Some(SortOrder::Descending))
        .await
        .expect("list succeeds");

    assert_eq!(products.len(), 5);
    // Descending sort is by id on this API.
    assert!(products.windows(2).all(|w| w[0].id >= w[1].id));
}

#[tokio::test]
#[ignore]
async fn lists_categories() {
    let categories = client().products().categories().await.expect("categories");
    assert!(categories.iter().any(|c| c == "electronics"));
}
