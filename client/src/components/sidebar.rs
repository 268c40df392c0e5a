//! Slide-in navigation drawer opened from the top bar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;

/// Drawer with the primary section links. Any link or the backdrop closes it.
#[component]
pub fn Sidebar(#[prop(into)] is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="sidebar__backdrop" on:click=move |_| on_close.run(())></div>
        </Show>
        <nav
            class=move || if is_open.get() { "sidebar sidebar--open" } else { "sidebar" }
            aria-hidden=move || (!is_open.get()).to_string()
        >
            <div class="sidebar__header">
                <span class="sidebar__title">"HorarioUCF"</span>
                <button class="sidebar__close" on:click=move |_| on_close.run(()) title="Cerrar menú">
                    "✕"
                </button>
            </div>
            <ul class="sidebar__links">
                <li on:click=move |_| on_close.run(())>
                    <A href=routes::HOME>"Inicio"</A>
                </li>
                <li on:click=move |_| on_close.run(())>
                    <A href=routes::SCHEDULE>"Horarios"</A>
                </li>
                <li on:click=move |_| on_close.run(())>
                    <A href=routes::DIAGNOSTIC>"Diagnóstico de API"</A>
                </li>
            </ul>
        </nav>
    }
}
