//! Wire DTOs and errors for the authentication API.
//!
//! DESIGN
//! ======
//! Field names follow the remote API's camelCase JSON. Failures are a typed
//! `ApiError` rather than an ad-hoc shape so callers can ask for the
//! server-provided message without probing nested optional fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::form::{Field, FormState};

/// Payload for `LoginUser`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn from_form(form: &FormState) -> Self {
        Self { email: form.get(Field::Email).to_owned(), password: form.get(Field::Password).to_owned() }
    }
}

/// Payload for `RegisterUser`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterCredentials {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            username: form.get(Field::Username).to_owned(),
            email: form.get(Field::Email).to_owned(),
            password: form.get(Field::Password).to_owned(),
            confirm_password: form.get(Field::ConfirmPassword).to_owned(),
        }
    }
}

/// Access/refresh token pair returned by a successful login or registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Body of a successful `RegisterUser` call.
///
/// Any 2xx counts as a created account. `data` may be a user record, a token
/// pair, or missing entirely; tokens are picked out of it when present.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub data: Option<Value>,
}

impl RegisterResponse {
    /// Read a success body. Empty or non-JSON bodies carry no tokens.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Tokens worth persisting: a non-empty `data.accessToken` string, plus
    /// `data.refreshToken` when the API sent one.
    pub fn tokens(&self) -> Option<AuthTokens> {
        let data = self.data.as_ref()?;
        let access = data.get("accessToken").and_then(Value::as_str).filter(|t| !t.is_empty())?;
        let refresh = data.get("refreshToken").and_then(Value::as_str).unwrap_or_default();
        Some(AuthTokens { access_token: access.to_owned(), refresh_token: refresh.to_owned() })
    }
}

/// Error body the API sends alongside a non-success status.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    NetworkError,
    ValidationError,
    ServerError,
}

/// A failed call to the authentication API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a readable response.
    #[error("network error: {0}")]
    Network(String),

    /// The API rejected the request (4xx).
    #[error("request rejected with status {status}")]
    Validation { status: u16, message: Option<String> },

    /// The API failed to handle the request (5xx or other non-success).
    #[error("server error with status {status}")]
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// Classify a non-success HTTP status and its optional body message.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.trim().is_empty());
        if (400..500).contains(&status) {
            Self::Validation { status, message }
        } else {
            Self::Server { status, message }
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Network(_) => ApiErrorKind::NetworkError,
            Self::Validation { .. } => ApiErrorKind::ValidationError,
            Self::Server { .. } => ApiErrorKind::ServerError,
        }
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Network(_) => None,
            Self::Validation { message, .. } | Self::Server { message, .. } => message.as_deref(),
        }
    }

    /// Text for the error toast: the server's message, else `fallback`.
    pub fn notice(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}
