//! Fixed client-side route paths.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Landing page after login.
pub const HOME: &str = "/inicio";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
/// Schedule generator, only offered to privileged roles.
pub const SCHEDULE: &str = "/schedule";
/// API configuration diagnostic panel.
pub const DIAGNOSTIC: &str = "/diagnostico";
