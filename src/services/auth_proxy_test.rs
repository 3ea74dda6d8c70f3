use serde_json::json;

use super::*;

#[test]
fn endpoint_joins_base_and_operation() {
    let upstream = AuthUpstream::new("https://auth.example.com/users".to_owned(), 5).unwrap();
    assert_eq!(upstream.endpoint(AuthOperation::Login), "https://auth.example.com/users/login");
    assert_eq!(upstream.endpoint(AuthOperation::Register), "https://auth.example.com/users/register");
    assert_eq!(upstream.base_url(), "https://auth.example.com/users");
}

#[test]
fn reply_body_passes_json_through() {
    assert_eq!(reply_body(br#"{"accessToken":"a"}"#), json!({ "accessToken": "a" }));
}

#[test]
fn reply_body_wraps_plain_text_as_message() {
    assert_eq!(reply_body(b"  Bad Gateway \n"), json!({ "message": "Bad Gateway" }));
}

#[test]
fn reply_body_empty_is_empty_object() {
    assert_eq!(reply_body(b""), json!({}));
}

#[tokio::test]
async fn forward_to_unreachable_host_is_request_error() {
    // Port 9 (discard) on loopback is not expected to accept connections.
    let upstream = AuthUpstream::new("http://127.0.0.1:9".to_owned(), 2).unwrap();
    let err = upstream.forward(AuthOperation::Login, &json!({})).await.unwrap_err();
    assert!(matches!(err, UpstreamError::Request(_)));
}
