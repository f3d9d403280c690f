#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn burn_rate_matches_the_headline_numbers() {
    // $1.2M of combined salary over 7,488,000 working seconds.
    let per_second = burn_per_second();
    assert!((per_second - 0.160_256).abs() < 1e-6);
}

#[test]
fn meter_starts_running_at_zero() {
    let meter = MeetingMeter::new();
    assert!(meter.is_running());
    assert_eq!(meter.cost(), 0.0);
    assert_eq!(meter.display(), "$0.00");
}

#[test]
fn ten_ticks_accrue_one_second_of_burn() {
    let mut meter = MeetingMeter::new();
    for _ in 0..10 {
        meter.tick();
    }
    assert!((meter.cost() - burn_per_second()).abs() < 1e-9);
}

#[test]
fn pausing_freezes_the_meter() {
    let mut meter = MeetingMeter::new();
    meter.tick();
    let frozen = meter.cost();
    meter.toggle();
    assert!(!meter.is_running());
    for _ in 0..100 {
        meter.tick();
    }
    assert_eq!(meter.cost(), frozen);
    meter.toggle();
    meter.tick();
    assert!(meter.cost() > frozen);
}

#[test]
fn display_rounds_to_cents() {
    let mut meter = MeetingMeter::new();
    // 625 ticks = 62.5 seconds ≈ $10.016.
    for _ in 0..625 {
        meter.tick();
    }
    assert_eq!(meter.display(), "$10.02");
}
