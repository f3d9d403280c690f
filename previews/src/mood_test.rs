use super::*;

#[test]
fn empty_text_is_neutral() {
    assert_eq!(mood_hue(""), NEUTRAL_HUE);
}

#[test]
fn unmatched_text_is_neutral() {
    assert_eq!(mood_hue("qwerty"), 270);
}

#[test]
fn one_hue_per_group() {
    assert_eq!(mood_hue("so happy today"), 50);
    assert_eq!(mood_hue("feeling sad"), 220);
    assert_eq!(mood_hue("this is terrible"), 0);
    assert_eq!(mood_hue("serene morning"), 180);
    assert_eq!(mood_hue("party time"), 30);
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(mood_hue("LOVE"), 50);
    assert_eq!(mood_hue("So Calm"), 180);
}

#[test]
fn later_groups_override_earlier_ones() {
    // "happy" hits the happy group, "dance" hits energetic; energetic is
    // checked last so it wins.
    assert_eq!(mood_hue("happy dance"), 30);
    // "ugh!" hits happy via "!" but angry overrides.
    assert_eq!(mood_hue("ugh!"), 0);
}

#[test]
fn punctuation_and_emoji_count_as_keywords() {
    assert_eq!(mood_hue("what a day!"), 50);
    assert_eq!(mood_hue("😊"), 50);
}

#[test]
fn color_string_uses_fixed_saturation_and_lightness() {
    assert_eq!(mood_color("breathe"), "hsl(180, 70%, 60%)");
    assert_eq!(mood_color(""), "hsl(270, 70%, 60%)");
}
