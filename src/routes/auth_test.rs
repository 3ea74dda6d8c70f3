use axum::Router;
use axum::routing::post;
use serde_json::json;

use super::*;
use crate::services::auth_proxy::AuthUpstream;

/// Spawn a stand-in auth API on an ephemeral loopback port and return its base URL.
async fn spawn_stub_upstream() -> String {
    let app = Router::new()
        .route(
            "/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "hunter2" {
                    (StatusCode::OK, Json(json!({ "accessToken": "a", "refreshToken": "b" })))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" })))
                }
            }),
        )
        .route(
            "/register",
            post(|| async { (StatusCode::CONFLICT, Json(json!({ "message": "Email exists" }))) }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn state_for(base_url: String) -> AppState {
    AppState::new(Some(AuthUpstream::new(base_url, 5).unwrap()))
}

// =============================================================================
// Unconfigured / unreachable upstream
// =============================================================================

#[tokio::test]
async fn login_without_upstream_is_service_unavailable() {
    let resp = login(State(AppState::new(None)), Json(json!({}))).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(resp).await, json!({ "message": NOT_CONFIGURED_MESSAGE }));
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let resp = register(State(state_for("http://127.0.0.1:9".to_owned())), Json(json!({}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(resp).await, json!({ "message": UNAVAILABLE_MESSAGE }));
}

// =============================================================================
// Relaying upstream replies
// =============================================================================

#[tokio::test]
async fn login_relays_tokens_on_success() {
    let state = state_for(spawn_stub_upstream().await);
    let resp = login(State(state), Json(json!({ "email": "a@b.co", "password": "hunter2" }))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "accessToken": "a", "refreshToken": "b" }));
}

#[tokio::test]
async fn login_relays_upstream_rejection_status_and_message() {
    let state = state_for(spawn_stub_upstream().await);
    let resp = login(State(state), Json(json!({ "email": "a@b.co", "password": "nope" }))).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await["message"], "Invalid credentials");
}

#[tokio::test]
async fn register_relays_conflict_message() {
    let state = state_for(spawn_stub_upstream().await);
    let resp = register(State(state), Json(json!({ "username": "ana" }))).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(resp).await, json!({ "message": "Email exists" }));
}
