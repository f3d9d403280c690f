#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_off_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_the_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn apply_is_callable_off_browser() {
    apply(false);
    apply(true);
}
