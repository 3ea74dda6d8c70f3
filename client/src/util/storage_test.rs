use super::*;

fn tokens(access: &str, refresh: &str) -> AuthTokens {
    AuthTokens { access_token: access.to_owned(), refresh_token: refresh.to_owned() }
}

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::default();
    assert!(store.is_empty());
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    assert_eq!(store.get("missing"), None);
}

#[test]
fn memory_store_overwrites_existing_key() {
    let store = MemoryStore::default();
    store.set("k", "old");
    store.set("k", "new");
    assert_eq!(store.get("k").as_deref(), Some("new"));
    assert_eq!(store.len(), 1);
}

#[test]
fn persist_tokens_uses_named_keys() {
    let store = MemoryStore::default();
    persist_tokens(&store, &tokens("a", "b"));
    assert_eq!(store.get("accessToken").as_deref(), Some("a"));
    assert_eq!(store.get("refreshToken").as_deref(), Some("b"));
}

#[test]
fn persist_tokens_skips_blank_refresh_token() {
    let store = MemoryStore::default();
    persist_tokens(&store, &tokens("a", ""));
    assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("a"));
    assert_eq!(store.get(REFRESH_TOKEN_KEY), None);
    assert_eq!(store.len(), 1);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    BrowserStorage.set(ACCESS_TOKEN_KEY, "a");
    assert_eq!(BrowserStorage.get(ACCESS_TOKEN_KEY), None);
}
