//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, admin form modals, and the route guard
//! while reading/writing shared state from Leptos context providers.

pub mod admin_layout;
pub mod blog_form;
pub mod error_message;
pub mod gallery_form;
pub mod layout;
pub mod loader;
pub mod project_form;
pub mod protected_route;
pub mod sidebar;
