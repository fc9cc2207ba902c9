//! Pure storefront REST API client.
//!
//! Thin, typed wrappers around the storefront backend: cart, wishlist,
//! payment verification, accounts and the analytics ping. No UI logic lives
//! here; callers decide what an error means to the user.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_client::StorefrontClient;
//!
//! let client = StorefrontClient::new("https://shop.example.com/api")
//!     .with_token(token)
//!     .with_retries(1);
//!
//! let items = client.list_cart().await?;
//! let verification = client.verify_payment("track-123").await?;
//! ```

pub mod accounts;
pub mod analytics;
pub mod cart;
pub mod error;
pub mod payment;
pub mod types;
pub mod wishlist;

pub use error::{Result, StorefrontError};
pub use types::{
    Account, CartItem, CartItemInput, NewAccount, PaymentStatus, PaymentVerification,
    ProductSummary, WishlistItem,
};

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use types::ErrorBody;

/// Storefront REST client.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http_client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
    retries: u32,
}

impl StorefrontClient {
    /// Create a client for the given API base URL. Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: None,
            retries: 0,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Number of automatic retries for requests that opt into them.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http_client.get(self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http_client.post(self.url(path)))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http_client.put(self.url(path)))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http_client.delete(self.url(path)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send once and map non-2xx responses to `StorefrontError::Api`.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        self.send_with_retries(request, 0).await
    }

    /// Send, retrying network failures and 5xx responses up to `retries`
    /// extra times. 4xx responses are returned on the first attempt.
    pub(crate) async fn send_with_retries(
        &self,
        request: RequestBuilder,
        retries: u32,
    ) -> Result<Response> {
        let mut attempt = 0;
        loop {
            let builder = request.try_clone().ok_or_else(|| {
                StorefrontError::Config("request body cannot be replayed".into())
            })?;

            let outcome = match builder.send().await {
                Ok(response) => check_status(response).await,
                Err(e) => Err(StorefrontError::from(e)),
            };

            match outcome {
                Err(err) if err.is_transient() && attempt < retries => {
                    attempt += 1;
                    warn!(error = %err, attempt, retries, "Storefront request failed, retrying");
                }
                other => {
                    debug!(attempts = attempt + 1, ok = other.is_ok(), "Storefront request finished");
                    return other;
                }
            }
        }
    }

    pub(crate) async fn json<T: DeserializeOwned>(response: Response) -> Result<T> {
        Ok(response.json::<T>().await?)
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or(body);

    warn!(status = %status, error = %message, "Storefront API error");
    Err(StorefrontError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = StorefrontClient::new("https://shop.example.com/api/")
            .with_token("tok")
            .with_retries(1);

        assert_eq!(client.base_url(), "https://shop.example.com/api");
        assert_eq!(client.auth_token.as_deref(), Some("tok"));
        assert_eq!(client.retries(), 1);
    }

    #[test]
    fn test_url_joining() {
        let client = StorefrontClient::new("http://localhost:8000/api");
        assert_eq!(client.url("/cart/items"), "http://localhost:8000/api/cart/items");
        assert_eq!(client.url("wishlist/count"), "http://localhost:8000/api/wishlist/count");
    }
}
