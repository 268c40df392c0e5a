//! Root component, router, and SSR document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::api_diagnostic::ApiDiagnostic;
use crate::components::navigation::Navigation;
use crate::pages::section::SectionPage;
use crate::routes;
use crate::state::auth::AuthState;
use crate::util::auth::install_auth_refresh;

/// HTML document rendered by the server around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(AuthState::default()));

    view! {
        <Stylesheet id="horario" href="/pkg/horario.css" />
        <Title text="HorarioUCF" />
        <Router>
            <SessionSync />
            <Navigation />
            <main class="app-main">
                <Routes fallback=|| view! { <SectionPage title="Página no encontrada" /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=routes::HOME /> } />
                    <Route
                        path=path!("/inicio")
                        view=|| view! { <SectionPage title="Inicio" summary="Generador de horarios de la UCF." /> }
                    />
                    <Route path=path!("/login") view=|| view! { <SectionPage title="Iniciar Sesión" /> } />
                    <Route path=path!("/register") view=|| view! { <SectionPage title="Registrarse" /> } />
                    <Route path=path!("/schedule") view=|| view! { <SectionPage title="Generar Horario" /> } />
                    <Route path=path!("/diagnostico") view=ApiDiagnostic />
                </Routes>
            </main>
        </Router>
    }
}

/// Keeps the shared `AuthState` in step with client storage.
#[component]
fn SessionSync() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_auth_refresh(auth);
}
