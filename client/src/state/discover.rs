//! Slide state for the immersive full-screen navigator.
//!
//! DESIGN
//! ======
//! Navigation is two-phase: a request marks the slide direction so the
//! outgoing card can animate, then a commit (150ms later in the component)
//! moves the index. Requests that arrive mid-animation or at either end of
//! the list are rejected rather than queued.

#[cfg(test)]
#[path = "discover_test.rs"]
mod discover_test;

/// Which way the current card is animating out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    /// Card slides up, next post comes in from below.
    Up,
    /// Card slides down, previous post comes in from above.
    Down,
}

/// Position within the post list shown in immersive mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscoverNav {
    pub index: usize,
    pub len: usize,
    /// Direction of an animation in flight, cleared by [`Self::commit`].
    pub pending: Option<SlideDirection>,
}

impl DiscoverNav {
    /// Starts at `start`, clamped into the list.
    #[must_use]
    pub fn new(start: usize, len: usize) -> Self {
        Self {
            index: start.min(len.saturating_sub(1)),
            len,
            pending: None,
        }
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.index + 1 < self.len
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    /// Begins a forward slide. Returns false at the end of the list or
    /// while another slide is animating.
    pub fn request_next(&mut self) -> bool {
        if self.pending.is_some() || !self.can_next() {
            return false;
        }
        self.pending = Some(SlideDirection::Up);
        true
    }

    /// Begins a backward slide. Same rejection rules as [`Self::request_next`].
    pub fn request_prev(&mut self) -> bool {
        if self.pending.is_some() || !self.can_prev() {
            return false;
        }
        self.pending = Some(SlideDirection::Down);
        true
    }

    /// Applies the pending slide and clears it. No-op when nothing is
    /// in flight.
    pub fn commit(&mut self) {
        match self.pending.take() {
            Some(SlideDirection::Up) => self.index += 1,
            Some(SlideDirection::Down) => self.index -= 1,
            None => {}
        }
    }
}
