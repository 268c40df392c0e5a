//! Diagnostic panel echoing the backend base URL this bundle was built with.
//!
//! Deploys that forget `API_URL` fall back to a localhost backend and fail in
//! confusing ways; this panel makes the misconfiguration visible at a glance.
//!
//! The panel describes the browser bundle, not the server binary that
//! pre-rendered the page, so its values are captured in an `Effect` (which
//! only runs in the browser) and swapped in after hydration.

#[cfg(test)]
#[path = "api_diagnostic_test.rs"]
mod api_diagnostic_test;

use leptos::prelude::*;

use crate::config::{BuildEnv, configured_api_url, configured_api_url_label, is_local_api, resolve_api_base_url};

const REMEDIATION_STEPS: &[&str] = &[
    "Ve a Render → tu Static Site → Environment",
    "Verifica que existe: API_URL = https://generador-de-horarios-backend.onrender.com",
    "Ve a Manual Deploy → \"Clear build cache & deploy\"",
    "Espera a que termine el deploy",
    "Borra la caché del navegador y recarga",
];

/// Outcome of inspecting the effective base URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ApiTarget {
    Local,
    Remote,
}

impl ApiTarget {
    pub(crate) fn of(url: &str) -> Self {
        if is_local_api(url) { Self::Local } else { Self::Remote }
    }

    pub(crate) fn modifier(self) -> &'static str {
        match self {
            Self::Local => "api-diagnostic__value--error",
            Self::Remote => "api-diagnostic__value--ok",
        }
    }

    pub(crate) fn status_class(self) -> &'static str {
        match self {
            Self::Local => "api-diagnostic__status api-diagnostic__status--error",
            Self::Remote => "api-diagnostic__status api-diagnostic__status--ok",
        }
    }

    pub(crate) fn message(self) -> &'static str {
        match self {
            Self::Local => {
                "❌ ERROR: Está usando localhost. La variable API_URL NO está configurada correctamente."
            }
            Self::Remote => "✅ CORRECTO: Está usando el backend de producción.",
        }
    }
}

/// Everything the panel displays, taken from one build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DiagnosticSnapshot {
    pub(crate) raw_label: String,
    pub(crate) base_url: String,
    pub(crate) target: ApiTarget,
    pub(crate) env_json: String,
}

impl DiagnosticSnapshot {
    pub(crate) fn from_build(configured: Option<&str>, env: &BuildEnv) -> Self {
        let base_url = resolve_api_base_url(configured);
        Self {
            raw_label: configured_api_url_label(configured),
            target: ApiTarget::of(&base_url),
            base_url,
            env_json: env.to_pretty_json(),
        }
    }

    /// Snapshot of the build this code was compiled into.
    pub(crate) fn capture() -> Self {
        Self::from_build(configured_api_url(), &BuildEnv::current())
    }
}

/// Temporary diagnostic panel for deployment troubleshooting.
#[component]
pub fn ApiDiagnostic() -> impl IntoView {
    let snapshot = RwSignal::new(None::<DiagnosticSnapshot>);
    Effect::new(move || snapshot.set(Some(DiagnosticSnapshot::capture())));

    view! {
        <div class="api-diagnostic">
            <h2>"🔍 Diagnóstico de API"</h2>
            {move || match snapshot.get() {
                None => {
                    view! { <p class="api-diagnostic__loading">"Leyendo la configuración del navegador..."</p> }
                        .into_any()
                }
                Some(snapshot) => view! { <DiagnosticDetails snapshot /> }.into_any(),
            }}
            <div class="api-diagnostic__section api-diagnostic__help">
                <p><strong>"⚠️ Si ves \"undefined\" o \"localhost\":"</strong></p>
                <ol>
                    {REMEDIATION_STEPS.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                </ol>
            </div>
        </div>
    }
}

#[component]
fn DiagnosticDetails(snapshot: DiagnosticSnapshot) -> impl IntoView {
    let DiagnosticSnapshot { raw_label, base_url, target, env_json } = snapshot;
    let value_class = format!("api-diagnostic__value {}", target.modifier());

    view! {
        <div class="api-diagnostic__section">
            <p><strong>"API_URL en tiempo de compilación:"</strong></p>
            <code class="api-diagnostic__value api-diagnostic__value--raw">{raw_label}</code>
        </div>
        <div class="api-diagnostic__section">
            <p><strong>"API_BASE_URL que se está usando:"</strong></p>
            <code class=value_class>{base_url}</code>
            <p class={target.status_class()}>{target.message()}</p>
        </div>
        <div class="api-diagnostic__section">
            <p><strong>"Todas las variables de entorno disponibles:"</strong></p>
            <pre class="api-diagnostic__env">{env_json}</pre>
        </div>
    }
}
