use super::*;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::util::storage::{MemoryStore, REFRESH_TOKEN_KEY};

fn token_with_groups(groups: &str) -> String {
    let body = URL_SAFE_NO_PAD.encode(format!(r#"{{"groups":{groups}}}"#));
    format!("eyJhbGciOiJIUzI1NiJ9.{body}.sig")
}

#[test]
fn default_state_is_anonymous() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(!state.can_generate_schedule());
}

#[test]
fn load_reads_access_token_and_role() {
    let token = token_with_groups(r#"["admin"]"#);
    let store = MemoryStore::with(&[(ACCESS_TOKEN_KEY, token.as_str()), (REFRESH_TOKEN_KEY, "r")]);
    let state = AuthState::load(&store);
    assert!(state.is_authenticated());
    assert_eq!(state.role.as_deref(), Some("admin"));
    assert!(state.can_generate_schedule());
}

#[test]
fn malformed_token_is_authenticated_without_role() {
    let state = AuthState::from_access_token(Some("not-a-jwt".to_owned()));
    assert!(state.is_authenticated());
    assert_eq!(state.role, None);
    assert!(!state.can_generate_schedule());
}

#[test]
fn empty_access_token_counts_as_absent() {
    let state = AuthState::from_access_token(Some(String::new()));
    assert!(!state.is_authenticated());
}

#[test]
fn basic_user_role_cannot_generate_schedule() {
    let state = AuthState::from_access_token(Some(token_with_groups(r#"["user","admin"]"#)));
    assert_eq!(state.role.as_deref(), Some("user"));
    assert!(!state.can_generate_schedule());
}

#[test]
fn empty_role_cannot_generate_schedule() {
    let state = AuthState { access_token: Some("t".to_owned()), role: Some(String::new()) };
    assert!(!state.can_generate_schedule());
}

#[test]
fn any_other_role_can_generate_schedule() {
    for role in ["admin", "coordinador", "User"] {
        let state = AuthState { access_token: Some("t".to_owned()), role: Some(role.to_owned()) };
        assert!(state.can_generate_schedule(), "expected {role:?} to be privileged");
    }
}
