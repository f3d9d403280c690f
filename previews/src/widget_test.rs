use super::*;

#[test]
fn known_tags_resolve() {
    assert_eq!(WidgetKind::from_tag("MoodRing"), Some(WidgetKind::MoodRing));
    assert_eq!(WidgetKind::from_tag("RamenTimer"), Some(WidgetKind::RamenTimer));
}

#[test]
fn unknown_tags_fall_back() {
    assert_eq!(WidgetKind::from_tag("GitWrapped"), None);
    assert_eq!(WidgetKind::from_tag("SplitSecond"), None);
    assert_eq!(WidgetKind::from_tag(""), None);
}

#[test]
fn tag_lookup_is_case_sensitive() {
    assert_eq!(WidgetKind::from_tag("moodring"), None);
}

#[test]
fn tag_round_trips() {
    for kind in [
        WidgetKind::MoodRing,
        WidgetKind::Breathe,
        WidgetKind::MeetingCost,
        WidgetKind::ColorWars,
        WidgetKind::WallpaperMachine,
        WidgetKind::RamenTimer,
    ] {
        assert_eq!(WidgetKind::from_tag(kind.tag()), Some(kind));
    }
}
