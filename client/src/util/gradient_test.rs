use super::*;

#[test]
fn two_stop_tokens_render_both_colors() {
    assert_eq!(
        gradient_css("from-rose-500 to-pink-600"),
        "linear-gradient(135deg, #f43f5e, #db2777)"
    );
}

#[test]
fn three_stop_tokens_keep_the_via_color_in_the_middle() {
    assert_eq!(
        gradient_css("from-purple-600 via-pink-500 to-orange-400"),
        "linear-gradient(135deg, #9333ea, #ec4899, #fb923c)"
    );
}

#[test]
fn unknown_color_names_are_skipped() {
    assert_eq!(
        gradient_css("from-hotdog-500 to-pink-600"),
        "linear-gradient(135deg, #db2777, #db2777)"
    );
}

#[test]
fn unusable_tokens_fall_back_to_neutral_slate() {
    assert_eq!(gradient_css(""), FALLBACK);
    assert_eq!(gradient_css("bg-red-500 text-white"), FALLBACK);
}

#[test]
fn every_catalog_gradient_resolves_without_fallback() {
    for post in catalog::seed::posts() {
        let css = gradient_css(&post.gradient);
        assert_ne!(css, FALLBACK, "post {} gradient {:?}", post.id, post.gradient);
    }
    for meta in &catalog::model::CATEGORIES {
        let css = gradient_css(meta.color);
        assert_ne!(css, FALLBACK, "category {:?}", meta.label);
    }
}
