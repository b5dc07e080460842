//! Body scroll locking while a modal is open.
//!
//! Scroll suppression is a shared UI resource, so it is modeled as a guard:
//! acquiring sets `overflow: hidden` on `<body>` and dropping restores the
//! previous value, which covers every exit path of the owning modal.

/// Guard that blocks body scrolling while alive.
pub struct ScrollLock {
    previous: Option<String>,
}

impl ScrollLock {
    /// Lock body scrolling, remembering the prior inline `overflow` value.
    pub fn acquire() -> Self {
        let previous = set_body_overflow("hidden");
        Self { previous }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let restored = self.previous.take().unwrap_or_default();
        let _ = set_body_overflow(&restored);
    }
}

/// Set the inline `overflow` style on `<body>`, returning the old value.
fn set_body_overflow(value: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())?;
        let previous = body
            .style()
            .get_property_value("overflow")
            .ok()
            .filter(|v| !v.is_empty());
        let _ = body.style().set_property("overflow", value);
        previous
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
        None
    }
}
