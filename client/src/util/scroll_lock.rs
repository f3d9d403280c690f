//! Body scroll locking for full-cover overlays.
//!
//! Overlays that cover the page (detail, profile, wizard, immersive mode)
//! freeze the feed behind them. Callers pair [`lock`] on mount with
//! [`unlock`] in `on_cleanup`.

/// Stop the page behind an overlay from scrolling.
pub fn lock() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.style().set_property("overflow", "hidden");
        }
    }
}

/// Restore page scrolling once the overlay is gone.
pub fn unlock() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.style().remove_property("overflow");
        }
    }
}
