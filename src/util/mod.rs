//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod browser;
pub mod format;
pub mod markdown;
pub mod scroll_lock;
pub mod storage;
