use super::*;

#[test]
fn small_counts_pass_through() {
    assert_eq!(compact_count(0), "0");
    assert_eq!(compact_count(999), "999");
}

#[test]
fn thousands_get_one_decimal_and_k() {
    assert_eq!(compact_count(1_000), "1.0K");
    assert_eq!(compact_count(1_500), "1.5K");
    assert_eq!(compact_count(12_400), "12.4K");
    assert_eq!(compact_count(999_999), "1000.0K");
}

#[test]
fn millions_get_one_decimal_and_m() {
    assert_eq!(compact_count(1_000_000), "1.0M");
    assert_eq!(compact_count(2_300_000), "2.3M");
}

#[test]
fn seed_counter_values_render_as_shown_on_cards() {
    assert_eq!(compact_count(234_000), "234.0K");
    assert_eq!(compact_count(4_823), "4.8K");
    assert_eq!(compact_count(89_200), "89.2K");
}
