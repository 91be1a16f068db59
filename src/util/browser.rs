//! Thin wrappers over browser APIs used by pages.
//!
//! Outside the browser these are inert: no origin, nothing copied, every
//! confirmation declined.

/// `window.location.origin`, or an empty string.
pub fn origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Best-effort clipboard write. Returns whether a clipboard was available.
pub fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(clipboard) = window.navigator().clipboard() {
                let _ = clipboard.write_text(text);
                return true;
            }
        }
        false
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        false
    }
}

/// Native confirmation dialog.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Resolve after `ms` milliseconds. Resolves immediately outside the browser.
pub async fn sleep(ms: u32) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
    }
}
