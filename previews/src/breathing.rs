//! The inhale/hold/exhale cycle behind the breathing guide.
//!
//! One tick equals one second. The cycle runs 4 seconds in, 3 held,
//! 4 out, then restarts; the circle is expanded through inhale and hold
//! and contracts on exhale.

#[cfg(test)]
#[path = "breathing_test.rs"]
mod breathing_test;

/// Current phase of the breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreathPhase {
    #[default]
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    /// Instruction label shown inside the circle.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Inhale => "Breathe in",
            Self::Hold => "Hold",
            Self::Exhale => "Breathe out",
        }
    }

    /// Whether the circle is at full size in this phase.
    #[must_use]
    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Inhale | Self::Hold)
    }
}

/// Second counter plus derived phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreathCycle {
    seconds: u32,
    phase: BreathPhase,
}

impl BreathCycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one second. Wraps back to a fresh inhale after second 10.
    pub fn tick(&mut self) {
        let next = self.seconds + 1;
        if next < 4 {
            self.phase = BreathPhase::Inhale;
            self.seconds = next;
        } else if next < 7 {
            self.phase = BreathPhase::Hold;
            self.seconds = next;
        } else if next < 11 {
            self.phase = BreathPhase::Exhale;
            self.seconds = next;
        } else {
            self.phase = BreathPhase::Inhale;
            self.seconds = 0;
        }
    }

    #[must_use]
    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }
}
