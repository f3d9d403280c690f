//! Running dollar meter for the meeting cost counter.
//!
//! Eight attendees at an estimated $150k/yr, burned against a 52-week,
//! 40-hour working year. The meter starts running and accrues in
//! tenth-of-a-second ticks; pausing freezes it without resetting.

#[cfg(test)]
#[path = "meeting_test.rs"]
mod meeting_test;

/// People in the room.
pub const ATTENDEES: u32 = 8;

/// Estimated average salary in dollars per year.
pub const AVG_SALARY: f64 = 150_000.0;

const WORK_SECONDS_PER_YEAR: f64 = 52.0 * 40.0 * 3600.0;

/// Fraction of a second each tick represents.
const TICK_SECONDS: f64 = 0.1;

/// Combined cost of everyone's time, in dollars per second.
#[must_use]
pub fn burn_per_second() -> f64 {
    AVG_SALARY * f64::from(ATTENDEES) / WORK_SECONDS_PER_YEAR
}

/// Accumulated meeting cost.
#[derive(Debug, Clone, Copy)]
pub struct MeetingMeter {
    cost: f64,
    running: bool,
}

impl Default for MeetingMeter {
    fn default() -> Self {
        Self { cost: 0.0, running: true }
    }
}

impl MeetingMeter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accrue one tick's worth of cost. No-op while paused.
    pub fn tick(&mut self) {
        if self.running {
            self.cost += burn_per_second() * TICK_SECONDS;
        }
    }

    /// Flip between running and paused.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The headline figure, e.g. `"$12.34"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.cost)
    }
}
