use super::*;

// =========================================================================
// Hashing
// =========================================================================

#[test]
fn empty_word_hashes_to_zero() {
    assert_eq!(seed_hash(""), 0);
}

#[test]
fn default_seed_word_hash() {
    assert_eq!(seed_hash("ocean"), 105_560_318);
}

#[test]
fn hash_walks_utf16_code_units() {
    // U+1F60A is a surrogate pair (0xD83D, 0xDE0A).
    assert_eq!(seed_hash("😊"), 1_772_909);
}

#[test]
fn hash_truncates_to_32_bits_each_step() {
    // Seven 'z's overflow i32 twice; the final value reflects both wraps.
    assert_eq!(seed_hash("zzzzzzz"), 215_481_018);
}

#[test]
fn hash_is_deterministic_and_word_sensitive() {
    assert_eq!(seed_hash("ocean"), seed_hash("ocean"));
    assert_ne!(seed_hash("ocean"), seed_hash("Ocean"));
}

// =========================================================================
// Spec derivation
// =========================================================================

#[test]
fn spec_for_the_default_word() {
    let spec = WallpaperSpec::from_word("ocean");
    assert_eq!(spec.seed, 105_560_318);
    assert_eq!(spec.hue1, 38);
    assert_eq!(spec.hue2, 266);
    assert_eq!(spec.hue3, 134);
    assert_eq!(spec.pattern, PatternKind::Triangles);
}

#[test]
fn pattern_family_follows_seed_mod_four() {
    assert_eq!(WallpaperSpec::from_word("d").pattern, PatternKind::Circles);
    assert_eq!(WallpaperSpec::from_word("a").pattern, PatternKind::Lines);
    assert_eq!(WallpaperSpec::from_word("b").pattern, PatternKind::Triangles);
    assert_eq!(WallpaperSpec::from_word("c").pattern, PatternKind::Dots);
}

#[test]
fn gradient_stops_darken_toward_the_bottom() {
    let spec = WallpaperSpec::from_word("ocean");
    let [start, mid, end] = spec.gradient_stops();
    assert_eq!(start, (0.0, "hsl(38, 70%, 50%)".to_string()));
    assert_eq!(mid, (0.5, "hsl(266, 60%, 40%)".to_string()));
    assert_eq!(end, (1.0, "hsl(134, 80%, 30%)".to_string()));
}

// =========================================================================
// Geometry
// =========================================================================

/// Single-letter seed with small, hand-checkable values (hash 97).
fn spec_a() -> WallpaperSpec {
    WallpaperSpec::from_word("a")
}

#[test]
fn circle_positions_for_a_known_seed() {
    let shapes = circles(&spec_a(), 200, 320);
    assert_eq!(shapes.len(), 20);
    assert_eq!(shapes[0], Circle { x: 49, y: 127, radius: 27, hue: 97 });
    assert_eq!(shapes[1], Circle { x: 98, y: 254, radius: 44, hue: 117 });
}

#[test]
fn line_endpoints_for_a_known_seed() {
    let shapes = lines(&spec_a(), 200);
    assert_eq!(shapes.len(), 15);
    assert_eq!(shapes[0], Line { x_top: 61, x_bottom: 31, width: 2, hue: 319 });
    // Stroke widths cycle 2, 3, 4, 5.
    let widths: Vec<i32> = shapes.iter().take(5).map(|l| l.width).collect();
    assert_eq!(widths, [2, 3, 4, 5, 2]);
}

#[test]
fn triangle_geometry_for_a_known_seed() {
    let shapes = triangles(&spec_a(), 200, 320);
    assert_eq!(shapes.len(), 12);
    assert_eq!(shapes[0], Triangle { x: 43, y: 253, size: 67, hue: 181 });
}

#[test]
fn dot_lattice_covers_the_canvas_on_a_20px_step() {
    let all = dots(&spec_a(), 200, 320);
    assert_eq!(all.len(), 10 * 16);
    assert_eq!(all[0], Dot { x: 0, y: 0, radius: 4, hue: 97 });
    assert!(all.iter().all(|d| d.x % 20 == 0 && d.y % 20 == 0));
    assert!(all.iter().all(|d| (2..=6).contains(&d.radius)));
}

#[test]
fn hues_stay_within_the_color_wheel() {
    let spec = WallpaperSpec::from_word("wallpaper machine");
    assert!(spec.hue1 < 360 && spec.hue2 < 360 && spec.hue3 < 360);
    for c in circles(&spec, 200, 320) {
        assert!(c.hue < 360);
    }
}
