//! # Catalog Error Types
//!
//! Error types for demo store API operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  HTTP failure (reqwest::Error) or non-2xx status                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  CatalogError (this module) ← categorized by status code            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  UI displays a user-friendly message                                │
//! │                                                                     │
//! │  No automatic retries: the caller decides whether to try again.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Demo store API failures, categorized by HTTP status the way the
/// storefront presents them.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request never produced a response (DNS, connect, timeout).
    #[error("Network error. Please check your connection.")]
    Network(#[source] reqwest::Error),

    /// 400 with whatever message the server provided.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 401: the demo API rejects bad credentials this way.
    #[error("Unauthorized access. Please login again.")]
    Unauthorized,

    /// 403.
    #[error("Forbidden. You do not have permission.")]
    Forbidden,

    /// 404: unknown product id, unknown category.
    #[error("Resource not found.")]
    NotFound,

    /// Any 5xx.
    #[error("Server error ({status}). Please try again later.")]
    Server { status: u16 },

    /// 2xx with a body that doesn't match the expected shape.
    #[error("Unexpected response from the store API: {0}")]
    Decode(#[source] reqwest::Error),

    /// Anything else (unexpected status code).
    #[error("Something went wrong (status {status})")]
    Unexpected { status: u16 },
}

impl CatalogError {
    /// Maps a non-success status code to the matching variant.
    pub(crate) fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            400 => CatalogError::BadRequest(message.unwrap_or_else(|| "Bad request".to_string())),
            401 => CatalogError::Unauthorized,
            403 => CatalogError::Forbidden,
            404 => CatalogError::NotFound,
            500..=599 => CatalogError::Server { status },
            _ => CatalogError::Unexpected { status },
        }
    }
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            CatalogError::from_status(404, None),
            CatalogError::NotFound
        ));
        assert!(matches!(
            CatalogError::from_status(401, None),
            CatalogError::Unauthorized
        ));
        assert!(matches!(
            CatalogError::from_status(503, None),
            CatalogError::Server { status: 503 }
        ));
        assert!(matches!(
            CatalogError::from_status(418, None),
            CatalogError::Unexpected { status: 418 }
        ));
    }

    #[test]
    fn test_bad_request_keeps_server_message() {
        let err = CatalogError::from_status(400, Some("username is required".to_string()));
        assert_eq!(err.to_string(), "Bad request: username is required");
    }
}
