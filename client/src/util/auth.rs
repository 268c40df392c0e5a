//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session tokens live in client storage and may change under the app (the
//! login page writes them, logout clears them). Components re-derive auth
//! state from storage instead of caching it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes;
use crate::state::auth::AuthState;
use crate::util::storage::{ACCESS_TOKEN_KEY, LocalStorage, REFRESH_TOKEN_KEY, TokenStore};

/// Clear both session tokens and return the path to send the user to.
pub fn logout<S: TokenStore>(store: &S) -> &'static str {
    store.remove(ACCESS_TOKEN_KEY);
    store.remove(REFRESH_TOKEN_KEY);
    log::info!("session tokens cleared");
    routes::LOGIN
}

/// Reload `auth` from `localStorage` now and after every route transition.
///
/// Effects only run in the browser, so server renders stay anonymous and the
/// first client pass fills in the real session.
pub fn install_auth_refresh(auth: RwSignal<AuthState>) {
    let location = use_location();
    Effect::new(move || {
        location.pathname.track();
        auth.set(AuthState::load(&LocalStorage));
    });
}
