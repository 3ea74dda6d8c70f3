//! Shared application state handed to Axum handlers.

use crate::services::auth_proxy::AuthUpstream;

#[derive(Clone)]
pub struct AppState {
    /// `None` when `AUTH_API_URL` is not configured.
    pub upstream: Option<AuthUpstream>,
}

impl AppState {
    pub fn new(upstream: Option<AuthUpstream>) -> Self {
        Self { upstream }
    }
}
