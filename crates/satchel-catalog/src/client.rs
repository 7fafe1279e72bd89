//! # Catalog Client
//!
//! Connection setup and the shared request plumbing for the demo store
//! API.
//!
//! ## Usage
//! ```rust,no_run
//! use satchel_catalog::{CatalogClient, CatalogConfig};
//!
//! # async fn example() -> Result<(), satchel_catalog::CatalogError> {
//! let client = CatalogClient::new(CatalogConfig::default())?;
//!
//! let product = client.products().get(1).await?;
//! println!("{} costs {}", product.title, product.price());
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::auth::AuthApi;
use crate::error::{CatalogError, CatalogResult};
use crate::products::ProductsApi;

/// Default demo store endpoint.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Default request timeout. The demo API is slow on cold starts but a
/// storefront can't spin forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Config
// =============================================================================

/// Catalog client configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the store API.
    pub base_url: Url,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// =============================================================================
// Client
// =============================================================================

/// The demo store API client.
///
/// Cheap to clone (reqwest pools connections internally); API groups
/// are borrowed views, repository-style:
///
/// - [`CatalogClient::products`] for catalog reads
/// - [`CatalogClient::auth`] for the demo login endpoint
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Creates a client with the given configuration.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CatalogError::Network)?;

        Ok(CatalogClient { http, config })
    }

    /// Product catalog operations.
    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    /// Authentication operations.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// The configured base URL (mainly for logging and tests).
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Shared request plumbing
    // -------------------------------------------------------------------------

    /// Resolves a path (plus query pairs) against the base URL.
    pub(crate) fn endpoint(&self, path: &str, query: &[(&str, String)]) -> CatalogResult<Url> {
        let mut url = self
            .config
            .base_url
            .join(path)
            .map_err(|_| CatalogError::BadRequest(format!("invalid path: {path}")))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// GET a JSON payload.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> CatalogResult<T> {
        let url = self.endpoint(path, query)?;
        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(CatalogError::Network)?;

        Self::decode(response).await
    }

    /// POST a JSON body, expect a JSON payload back.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> CatalogResult<T> {
        let url = self.endpoint(path, &[])?;
        debug!(%url, "POST");

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(CatalogError::Network)?;

        Self::decode(response).await
    }

    /// Turns a response into a typed value, or categorizes the failure
    /// by status code.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> CatalogResult<T> {
        let status = response.status();
        if !status.is_success() {
            // Best effort: surface whatever message the server sent.
            let message = response.text().await.ok().filter(|t| !t.is_empty());
            return Err(CatalogError::from_status(status.as_u16(), message));
        }

        response.json::<T>().await.map_err(CatalogError::Decode)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
