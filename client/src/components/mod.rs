//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome while reading shared state from Leptos
//! context providers.

pub mod api_diagnostic;
pub mod navigation;
pub mod sidebar;
