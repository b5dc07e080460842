//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the process-wide session store; `fetch` is the per-view async
//! resource primitive. Both keep their transition logic in plain functions so
//! the state machines are testable off the browser.

pub mod auth;
pub mod fetch;
