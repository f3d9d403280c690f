use super::*;

fn phases_over(ticks: usize) -> Vec<BreathPhase> {
    let mut cycle = BreathCycle::new();
    (0..ticks)
        .map(|_| {
            cycle.tick();
            cycle.phase()
        })
        .collect()
}

#[test]
fn starts_inhaling_at_zero() {
    let cycle = BreathCycle::new();
    assert_eq!(cycle.phase(), BreathPhase::Inhale);
    assert_eq!(cycle.seconds(), 0);
}

#[test]
fn full_cycle_is_four_three_four() {
    use BreathPhase::{Exhale, Hold, Inhale};
    assert_eq!(
        phases_over(11),
        [Inhale, Inhale, Inhale, Hold, Hold, Hold, Exhale, Exhale, Exhale, Exhale, Inhale]
    );
}

#[test]
fn cycle_wraps_to_second_zero() {
    let mut cycle = BreathCycle::new();
    for _ in 0..11 {
        cycle.tick();
    }
    assert_eq!(cycle.seconds(), 0);
    assert_eq!(cycle.phase(), BreathPhase::Inhale);
}

#[test]
fn circle_contracts_only_on_exhale() {
    assert!(BreathPhase::Inhale.is_expanded());
    assert!(BreathPhase::Hold.is_expanded());
    assert!(!BreathPhase::Exhale.is_expanded());
}

#[test]
fn labels_match_the_guide() {
    assert_eq!(BreathPhase::Inhale.label(), "Breathe in");
    assert_eq!(BreathPhase::Hold.label(), "Hold");
    assert_eq!(BreathPhase::Exhale.label(), "Breathe out");
}
