//! Networking modules for the portfolio REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request plumbing and error-message extraction, `services`
//! exposes the per-collection CRUD producers, and `types` defines the shared
//! wire schema.

pub mod api;
pub mod services;
pub mod types;
