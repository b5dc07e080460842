//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, selection, modal
//! visibility) and delegates chrome to `components`.

pub mod about;
pub mod admin_dashboard;
pub mod blog;
pub mod blog_post;
pub mod contact;
pub mod home;
pub mod login;
pub mod manage_blog;
pub mod manage_gallery;
pub mod manage_projects;
pub mod projects;
pub mod view_messages;
