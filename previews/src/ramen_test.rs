#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_to_medium_on_the_selector() {
    let timer = RamenTimer::new();
    assert_eq!(timer.phase(), RamenPhase::Picking);
    assert_eq!(timer.selected(), 1);
    assert_eq!(timer.level().label, "Medium");
}

#[test]
fn levels_cover_the_four_firmnesses() {
    let labels: Vec<&str> = FIRMNESS_LEVELS.iter().map(|l| l.label).collect();
    assert_eq!(labels, ["Soft", "Medium", "Firm", "Al Dente"]);
}

#[test]
fn minutes_render_without_trailing_zeros() {
    assert_eq!(format!("{}", FIRMNESS_LEVELS[0].minutes()), "4");
    assert_eq!(format!("{}", FIRMNESS_LEVELS[2].minutes()), "2.5");
    assert_eq!(FIRMNESS_LEVELS[3].minutes(), 2.0);
}

#[test]
fn select_ignores_out_of_range_indexes() {
    let mut timer = RamenTimer::new();
    timer.select(3);
    assert_eq!(timer.selected(), 3);
    timer.select(4);
    assert_eq!(timer.selected(), 3);
}

#[test]
fn start_arms_the_selected_cook_time() {
    let mut timer = RamenTimer::new();
    timer.select(2);
    timer.start();
    assert_eq!(timer.phase(), RamenPhase::Counting);
    assert_eq!(timer.remaining(), 150);
}

#[test]
fn countdown_reaches_done_then_returns_to_the_selector() {
    let mut timer = RamenTimer::new();
    timer.select(3);
    timer.start();
    for _ in 0..119 {
        timer.tick();
    }
    assert_eq!(timer.phase(), RamenPhase::Counting);
    assert_eq!(timer.remaining(), 1);
    timer.tick();
    assert_eq!(timer.phase(), RamenPhase::Done);
    assert_eq!(timer.remaining(), 0);
    timer.tick();
    assert_eq!(timer.phase(), RamenPhase::Picking);
}

#[test]
fn ticks_are_inert_while_picking() {
    let mut timer = RamenTimer::new();
    timer.tick();
    timer.tick();
    assert_eq!(timer.phase(), RamenPhase::Picking);
    assert_eq!(timer.remaining(), 0);
}

#[test]
fn clock_pads_seconds() {
    assert_eq!(clock(240), "4:00");
    assert_eq!(clock(150), "2:30");
    assert_eq!(clock(61), "1:01");
    assert_eq!(clock(9), "0:09");
    assert_eq!(clock(0), "0:00");
}
