//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages compose the shared components under a route. The schedule, login,
//! and register flows render as titled sections here; their forms live with
//! the backend-facing parts of the product.

pub mod section;
