//! Auth routes: same-origin proxy for login and registration.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::Value;

use crate::services::auth_proxy::{AuthOperation, NOT_CONFIGURED_MESSAGE, UNAVAILABLE_MESSAGE};
use crate::state::AppState;

/// `POST /api/auth/login`
pub async fn login(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    proxy(&state, AuthOperation::Login, &body).await
}

/// `POST /api/auth/register`
pub async fn register(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    proxy(&state, AuthOperation::Register, &body).await
}

fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}

async fn proxy(state: &AppState, op: AuthOperation, body: &Value) -> Response {
    let Some(upstream) = state.upstream.as_ref() else {
        return message_response(StatusCode::SERVICE_UNAVAILABLE, NOT_CONFIGURED_MESSAGE);
    };
    match upstream.forward(op, body).await {
        Ok(reply) => {
            let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            tracing::debug!(op = op.path(), %status, "auth upstream replied");
            (status, Json(reply.body)).into_response()
        }
        Err(e) => {
            tracing::warn!(op = op.path(), error = %e, "auth upstream unreachable");
            message_response(StatusCode::BAD_GATEWAY, UNAVAILABLE_MESSAGE)
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
