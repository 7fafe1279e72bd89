//! # Auth API
//!
//! The demo store's `/auth/login` endpoint. The returned token is
//! opaque to the rest of the workspace: the cart and pricing engine
//! never read or write session state.

use serde::{Deserialize, Serialize};

use crate::client::CatalogClient;
use crate::error::CatalogResult;

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Opaque bearer token returned on a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub token: String,
}

/// Borrow-scoped view over the auth endpoints.
pub struct AuthApi<'a> {
    client: &'a CatalogClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a CatalogClient) -> Self {
        AuthApi { client }
    }

    /// Logs in against the demo API.
    ///
    /// Bad credentials come back as 401 → `CatalogError::Unauthorized`.
    pub async fn login(&self, username: &str, password: &str) -> CatalogResult<Token> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.client.post_json("/auth/login", &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_decodes() {
        let token: Token = serde_json::from_str(r#"{ "token": "eyJhbGciOi" }"#).unwrap();
        assert_eq!(token.token, "eyJhbGciOi");
    }
}
