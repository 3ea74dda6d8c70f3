use super::*;

#[test]
fn default_client_targets_auth_proxy() {
    let api = HttpAuthApi::default();
    assert_eq!(api.login_endpoint(), "/api/auth/login");
    assert_eq!(api.register_endpoint(), "/api/auth/register");
}

#[test]
fn custom_base_trailing_slash_is_trimmed() {
    let api = HttpAuthApi::new("https://auth.example.com/v1/");
    assert_eq!(api.login_endpoint(), "https://auth.example.com/v1/login");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_fail_with_network_error_outside_browser() {
    let api = HttpAuthApi::default();
    let creds = LoginCredentials { email: "a@b.co".to_owned(), password: "x".to_owned() };
    let err = futures::executor::block_on(api.login_user(&creds)).unwrap_err();
    assert_eq!(err, ApiError::Network("not available on server".to_owned()));
}
