//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend base URL is baked into the WASM bundle at compile time from
//! the `API_URL` environment variable. When a deploy forgets to set it the
//! bundle silently talks to a local backend, which is what the diagnostic
//! panel exists to surface.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Serialize;

/// Fallback backend used when `API_URL` is unset or blank.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Label shown in place of the raw value when `API_URL` was not provided.
pub const UNSET_LABEL: &str = "undefined (no configurada)";

/// Raw `API_URL` captured when this crate was compiled.
pub fn configured_api_url() -> Option<&'static str> {
    option_env!("API_URL")
}

/// Trimmed configured value, or `None` when unset or blank.
fn non_blank(configured: Option<&str>) -> Option<&str> {
    configured.map(str::trim).filter(|value| !value.is_empty())
}

/// Pick the effective base URL from an optional configured value.
///
/// Blank values count as unset. A trailing `/` is dropped so callers can
/// join paths with `format!("{base}/api/...")`.
pub fn resolve_api_base_url(configured: Option<&str>) -> String {
    non_blank(configured).map_or_else(
        || DEFAULT_API_BASE_URL.to_owned(),
        |value| value.trim_end_matches('/').to_owned(),
    )
}

/// Effective backend base URL for this build.
pub fn api_base_url() -> String {
    resolve_api_base_url(configured_api_url())
}

/// Whether the URL points at a developer machine rather than a deployed backend.
pub fn is_local_api(url: &str) -> bool {
    url.contains("localhost")
}

/// Display text for the raw configured value. Blank counts as unset, as in
/// [`resolve_api_base_url`].
pub fn configured_api_url_label(configured: Option<&str>) -> String {
    non_blank(configured).map_or_else(|| UNSET_LABEL.to_owned(), str::to_owned)
}

/// Snapshot of the build environment echoed by the diagnostic panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuildEnv {
    #[serde(rename = "MODE")]
    pub mode: &'static str,
    #[serde(rename = "DEV")]
    pub dev: bool,
    #[serde(rename = "PROD")]
    pub prod: bool,
    #[serde(rename = "SSR")]
    pub ssr: bool,
    #[serde(rename = "BASE_URL")]
    pub base_url: &'static str,
    #[serde(rename = "API_URL", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<&'static str>,
}

impl BuildEnv {
    pub fn current() -> Self {
        let dev = cfg!(debug_assertions);
        Self {
            mode: if dev { "development" } else { "production" },
            dev,
            prod: !dev,
            ssr: cfg!(feature = "ssr"),
            base_url: "/",
            api_url: configured_api_url(),
        }
    }

    /// Two-space indented JSON, falling back to `{}` if serialization fails.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_owned())
    }
}
