//! Site-wide UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of feed state so page chrome can evolve
//! independently of what the feed is showing.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Presentation toggles shared across pages via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the dark palette is active. Persisted per browser.
    pub dark_mode: bool,
}
