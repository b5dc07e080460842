//! Small browser-dialog and navigation helpers.

/// Native confirm dialog. Always false on the server.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Open `url` in a new tab. No-op on the server.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
