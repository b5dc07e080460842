//! Browser localStorage helpers for session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the session
//! store can persist its token and user record without repeating web-sys
//! glue. Every operation swallows storage faults: a failed read behaves as
//! "nothing stored" and a failed write is silently dropped, so storage
//! problems degrade to a logged-out session instead of an error surface.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read a raw string value for `key`.
pub fn get_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store a raw string value for `key`.
pub fn set_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Load a JSON value from localStorage for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_string(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to localStorage for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    set_string(key, &raw);
}

/// Remove the value stored for `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
