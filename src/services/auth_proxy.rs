//! Auth proxy: forwards login/register calls to the remote auth API.
//!
//! DESIGN
//! ======
//! The browser only ever talks to this host (`/api/auth/*`), so the remote
//! API needs no CORS setup. Upstream status codes and JSON bodies are relayed
//! unchanged; the client maps them to its own error taxonomy.

use std::time::Duration;

use serde_json::Value;

pub const UNAVAILABLE_MESSAGE: &str = "Authentication service unavailable";
pub const NOT_CONFIGURED_MESSAGE: &str = "Authentication service not configured";

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The upstream could not be reached or its body could not be read.
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Remote operations exposed through the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    Login,
    Register,
}

impl AuthOperation {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }
}

/// Upstream status and body, ready to relay.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

#[derive(Clone)]
pub struct AuthUpstream {
    http: reqwest::Client,
    base_url: String,
}

impl AuthUpstream {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, op: AuthOperation) -> String {
        format!("{}/{}", self.base_url, op.path())
    }

    /// POST `body` to the upstream operation and capture its reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be read.
    pub async fn forward(&self, op: AuthOperation, body: &Value) -> Result<UpstreamReply, UpstreamError> {
        let resp = self.http.post(self.endpoint(op)).json(body).send().await?;
        let status = resp.status().as_u16();
        let bytes = resp.bytes().await?;
        Ok(UpstreamReply { status, body: reply_body(&bytes) })
    }
}

/// Decode an upstream body; plain text becomes `{"message": text}`.
pub(crate) fn reply_body(bytes: &[u8]) -> Value {
    if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
        return value;
    }
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    if text.is_empty() { serde_json::json!({}) } else { serde_json::json!({ "message": text }) }
}

#[cfg(test)]
#[path = "auth_proxy_test.rs"]
mod tests;
