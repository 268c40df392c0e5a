//! Top navigation bar with sidebar toggle, schedule shortcut, and account menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route. Reads `AuthState` from context to decide
//! whether to offer "Generar Horario" and which account actions to list.
//! Route changes are requested through a signal and performed by a single
//! effect that owns the router's navigate handle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::routes;
use crate::state::auth::AuthState;
use crate::state::ui::NavState;
use crate::util::auth::logout;
use crate::util::storage::LocalStorage;

/// Whether the element gaining focus is inside the element losing it.
#[cfg(feature = "hydrate")]
fn focus_stays_inside(ev: &leptos::ev::FocusEvent) -> bool {
    use wasm_bindgen::JsCast;

    let Some(container) = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
    else {
        return false;
    };
    let next = ev
        .related_target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    container.contains(next.as_ref())
}

#[cfg(not(feature = "hydrate"))]
fn focus_stays_inside(_ev: &leptos::ev::FocusEvent) -> bool {
    false
}

/// Application top bar.
#[component]
pub fn Navigation() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let nav = RwSignal::new(NavState::default());
    let pending_route = RwSignal::new(None::<&'static str>);

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = pending_route.get() {
            navigate(path, NavigateOptions::default());
        }
    });

    let go_to = move |path: &'static str| {
        nav.update(NavState::close_user_menu);
        pending_route.set(Some(path));
    };

    let on_logout = move |_| {
        let target = logout(&LocalStorage);
        auth.set(AuthState::default());
        go_to(target);
    };

    let on_menu_focus_out = move |ev: leptos::ev::FocusEvent| {
        let inside = focus_stays_inside(&ev);
        nav.update(|n| n.on_menu_focus_out(inside));
    };

    let sidebar_open = Signal::derive(move || nav.get().sidebar_open);
    let close_sidebar = Callback::new(move |()| nav.update(NavState::close_sidebar));

    view! {
        <Sidebar is_open=sidebar_open on_close=close_sidebar />

        <div class="navigation">
            <div class="navigation__brand">
                <button
                    class="navigation__menu-toggle"
                    on:click=move |_| nav.update(NavState::toggle_sidebar)
                    title="Abrir menú"
                >
                    "☰"
                </button>
                <A href=routes::HOME>
                    <div class="navigation__home">
                        <img class="navigation__logo" src="/assets/logo.png" alt="Logo HorarioUCF" />
                        <h1 class="navigation__title">"HorarioUCF"</h1>
                    </div>
                </A>
            </div>

            <div class="navigation__actions">
                <Show when=move || auth.with(AuthState::can_generate_schedule)>
                    <button class="btn navigation__schedule" on:click=move |_| go_to(routes::SCHEDULE)>
                        "Generar Horario"
                    </button>
                </Show>

                <div class="navigation__account" tabindex="0" on:focusout=on_menu_focus_out>
                    <button
                        class="navigation__account-button"
                        aria-label="Cuenta"
                        on:click=move |_| nav.update(NavState::toggle_user_menu)
                    >
                        "👤"
                    </button>
                    <Show when=move || nav.get().user_menu_open>
                        <div class="navigation__menu">
                            <Show
                                when=move || auth.with(AuthState::is_authenticated)
                                fallback=move || {
                                    view! {
                                        <button class="navigation__menu-item" on:click=move |_| go_to(routes::LOGIN)>
                                            "Iniciar Sesión"
                                        </button>
                                        <button class="navigation__menu-item" on:click=move |_| go_to(routes::REGISTER)>
                                            "Registrarse"
                                        </button>
                                    }
                                }
                            >
                                <button class="navigation__menu-item" on:click=on_logout>
                                    "Cerrar Sesión"
                                </button>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
