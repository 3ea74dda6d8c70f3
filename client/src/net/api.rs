//! REST client for the authentication API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the host
//! server's same-origin proxy.
//! Server-side (SSR) and native tests: calls fail with a network error since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an `ApiError`; non-success statuses carry the body's
//! `message` when the server sent one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, AuthTokens, LoginCredentials, RegisterCredentials, RegisterResponse};

/// Path prefix of the auth proxy on the host server.
pub const DEFAULT_API_BASE: &str = "/api/auth";

/// The two remote operations the forms depend on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `LoginUser`: exchange credentials for a token pair.
    async fn login_user(&self, credentials: &LoginCredentials) -> Result<AuthTokens, ApiError>;

    /// `RegisterUser`: create an account, possibly returning tokens.
    async fn register_user(&self, credentials: &RegisterCredentials) -> Result<RegisterResponse, ApiError>;
}

/// HTTP implementation rooted at `base` (normally [`DEFAULT_API_BASE`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base: String,
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl HttpAuthApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_owned();
        Self { base }
    }

    pub fn login_endpoint(&self) -> String {
        format!("{}/login", self.base)
    }

    pub fn register_endpoint(&self) -> String {
        format!("{}/register", self.base)
    }
}

/// POST `body` as JSON; non-success statuses become `ApiError`.
#[cfg(feature = "hydrate")]
async fn post<B: serde::Serialize>(url: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
    use super::types::ErrorBody;

    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let message = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message);
        return Err(ApiError::from_status(resp.status(), message));
    }
    Ok(resp)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

impl AuthApi for HttpAuthApi {
    async fn login_user(&self, credentials: &LoginCredentials) -> Result<AuthTokens, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = post(&self.login_endpoint(), credentials).await?;
            resp.json::<AuthTokens>().await.map_err(|e| ApiError::Network(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(unavailable())
        }
    }

    async fn register_user(&self, credentials: &RegisterCredentials) -> Result<RegisterResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            // The account exists once the status is 2xx, whatever the body holds.
            let resp = post(&self.register_endpoint(), credentials).await?;
            let body = resp.text().await.unwrap_or_else(|e| {
                log::warn!("register response body unreadable: {e}");
                String::new()
            });
            Ok(RegisterResponse::from_body(&body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(unavailable())
        }
    }
}
