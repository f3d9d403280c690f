use super::*;

#[test]
fn like_toggles_on_and_off() {
    let mut state = EngagementState::default();
    assert!(!state.is_liked("a1"));

    state.toggle_like("a1");
    assert!(state.is_liked("a1"));

    state.toggle_like("a1");
    assert!(!state.is_liked("a1"));
}

#[test]
fn toggles_are_independent_per_id_and_kind() {
    let mut state = EngagementState::default();
    state.toggle_like("a1");
    state.toggle_save("a2");

    assert!(state.is_liked("a1"));
    assert!(!state.is_liked("a2"));
    assert!(state.is_saved("a2"));
    assert!(!state.is_saved("a1"));
}

#[test]
fn adjusted_count_moves_by_exactly_one() {
    assert_eq!(adjusted_count(41, false), 41);
    assert_eq!(adjusted_count(41, true), 42);
    assert_eq!(adjusted_count(0, true), 1);
}
