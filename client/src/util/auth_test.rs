use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn logout_clears_both_tokens_and_targets_login() {
    let store = MemoryStore::with(&[
        (ACCESS_TOKEN_KEY, "access-jwt"),
        (REFRESH_TOKEN_KEY, "refresh-jwt"),
        ("theme", "dark"),
    ]);
    assert_eq!(logout(&store), "/login");
    assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    assert_eq!(store.get(REFRESH_TOKEN_KEY), None);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn logout_on_empty_store_still_targets_login() {
    let store = MemoryStore::default();
    assert_eq!(logout(&store), routes::LOGIN);
}

#[test]
fn state_after_logout_is_anonymous() {
    let store = MemoryStore::with(&[(ACCESS_TOKEN_KEY, "x.y.z"), (REFRESH_TOKEN_KEY, "r")]);
    logout(&store);
    let state = AuthState::load(&store);
    assert!(!state.is_authenticated());
    assert_eq!(state.role, None);
}
