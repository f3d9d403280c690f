//! Noodle firmness levels and the countdown for the ramen timer.
//!
//! Picking a firmness arms the timer; starting it counts down once per
//! second. When the countdown hits zero the done face holds for one more
//! tick before returning to the selector.

#[cfg(test)]
#[path = "ramen_test.rs"]
mod ramen_test;

/// One firmness option on the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmnessLevel {
    /// Chip label.
    pub label: &'static str,
    /// Chip emoji.
    pub emoji: &'static str,
    /// Cook time in seconds.
    pub seconds: u16,
}

impl FirmnessLevel {
    /// Cook time in minutes for the start button, e.g. `2.5`.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        f64::from(self.seconds) / 60.0
    }
}

/// The firmness options, softest first.
pub const FIRMNESS_LEVELS: [FirmnessLevel; 4] = [
    FirmnessLevel { label: "Soft", emoji: "🍜", seconds: 240 },
    FirmnessLevel { label: "Medium", emoji: "🍝", seconds: 180 },
    FirmnessLevel { label: "Firm", emoji: "💪", seconds: 150 },
    FirmnessLevel { label: "Al Dente", emoji: "🤌", seconds: 120 },
];

/// Selector defaults to Medium.
pub const DEFAULT_FIRMNESS: usize = 1;

/// What the widget face is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RamenPhase {
    /// Firmness selector with the start button.
    #[default]
    Picking,
    /// Countdown in progress.
    Counting,
    /// Zero reached; slurp message up for one tick.
    Done,
}

/// Timer state machine.
#[derive(Debug, Clone, Copy)]
pub struct RamenTimer {
    selected: usize,
    remaining: u16,
    phase: RamenPhase,
}

impl Default for RamenTimer {
    fn default() -> Self {
        Self { selected: DEFAULT_FIRMNESS, remaining: 0, phase: RamenPhase::Picking }
    }
}

impl RamenTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a firmness level. Out-of-range indexes keep the current pick.
    pub fn select(&mut self, index: usize) {
        if index < FIRMNESS_LEVELS.len() {
            self.selected = index;
        }
    }

    /// Arm the countdown for the selected level.
    pub fn start(&mut self) {
        self.remaining = self.level().seconds;
        self.phase = RamenPhase::Counting;
    }

    /// Advance one second.
    pub fn tick(&mut self) {
        match self.phase {
            RamenPhase::Picking => {}
            RamenPhase::Counting => {
                self.remaining = self.remaining.saturating_sub(1);
                if self.remaining == 0 {
                    self.phase = RamenPhase::Done;
                }
            }
            RamenPhase::Done => {
                self.phase = RamenPhase::Picking;
            }
        }
    }

    /// The currently selected firmness row.
    #[must_use]
    pub fn level(&self) -> &'static FirmnessLevel {
        FIRMNESS_LEVELS.get(self.selected).unwrap_or(&FIRMNESS_LEVELS[DEFAULT_FIRMNESS])
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn remaining(&self) -> u16 {
        self.remaining
    }

    #[must_use]
    pub fn phase(&self) -> RamenPhase {
        self.phase
    }
}

/// Formats seconds as `m:ss`, e.g. `150` → `"2:30"`.
#[must_use]
pub fn clock(seconds: u16) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
