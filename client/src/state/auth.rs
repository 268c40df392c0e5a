//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the navigation bar to decide which account actions and links to
//! render. Derived from client storage; never persisted on its own.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::jwt::{BASIC_ROLE, resolve_role};
use crate::util::storage::{ACCESS_TOKEN_KEY, TokenStore};

/// Session as seen by the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub access_token: Option<String>,
    /// First `groups` claim of the access token, if it decoded.
    pub role: Option<String>,
}

impl AuthState {
    /// Build state from the access token in `store`.
    pub fn load<S: TokenStore>(store: &S) -> Self {
        Self::from_access_token(store.get(ACCESS_TOKEN_KEY))
    }

    pub fn from_access_token(access_token: Option<String>) -> Self {
        let access_token = access_token.filter(|t| !t.is_empty());
        let role = resolve_role(access_token.as_deref());
        Self { access_token, role }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Whether the "generate schedule" action is offered.
    pub fn can_generate_schedule(&self) -> bool {
        self.role.as_deref().is_some_and(|role| !role.is_empty() && role != BASIC_ROLE)
    }
}
