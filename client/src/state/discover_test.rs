use super::*;

#[test]
fn new_clamps_start_into_the_list() {
    let nav = DiscoverNav::new(99, 5);
    assert_eq!(nav.index, 4);
    assert_eq!(nav.pending, None);

    let empty = DiscoverNav::new(3, 0);
    assert_eq!(empty.index, 0);
}

#[test]
fn bounds_reported_at_both_ends() {
    let first = DiscoverNav::new(0, 3);
    assert!(!first.can_prev());
    assert!(first.can_next());

    let last = DiscoverNav::new(2, 3);
    assert!(last.can_prev());
    assert!(!last.can_next());
}

#[test]
fn request_and_commit_advance_forward() {
    let mut nav = DiscoverNav::new(0, 3);
    assert!(nav.request_next());
    assert_eq!(nav.pending, Some(SlideDirection::Up));
    assert_eq!(nav.index, 0);

    nav.commit();
    assert_eq!(nav.index, 1);
    assert_eq!(nav.pending, None);
}

#[test]
fn request_and_commit_step_backward() {
    let mut nav = DiscoverNav::new(2, 3);
    assert!(nav.request_prev());
    assert_eq!(nav.pending, Some(SlideDirection::Down));

    nav.commit();
    assert_eq!(nav.index, 1);
}

#[test]
fn requests_rejected_at_list_ends() {
    let mut first = DiscoverNav::new(0, 3);
    assert!(!first.request_prev());
    assert_eq!(first.pending, None);

    let mut last = DiscoverNav::new(2, 3);
    assert!(!last.request_next());
    assert_eq!(last.pending, None);
}

#[test]
fn requests_rejected_while_a_slide_is_in_flight() {
    let mut nav = DiscoverNav::new(1, 4);
    assert!(nav.request_next());
    assert!(!nav.request_next());
    assert!(!nav.request_prev());
    assert_eq!(nav.pending, Some(SlideDirection::Up));

    nav.commit();
    assert!(nav.request_prev());
}

#[test]
fn commit_without_request_is_a_no_op() {
    let mut nav = DiscoverNav::new(1, 3);
    nav.commit();
    assert_eq!(nav.index, 1);
    assert_eq!(nav.pending, None);
}

#[test]
fn single_item_list_rejects_all_navigation() {
    let mut nav = DiscoverNav::new(0, 1);
    assert!(!nav.request_next());
    assert!(!nav.request_prev());
}
