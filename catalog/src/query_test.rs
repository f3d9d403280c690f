use super::*;

fn ids<'a>(posts: &'a [&'a AppPost]) -> Vec<&'a str> {
    posts.iter().map(|p| p.id.as_str()).collect()
}

// =========================================================================
// Lookups
// =========================================================================

#[test]
fn builder_lookup_by_id() {
    assert_eq!(builder("b4").map(|b| b.name.as_str()), Some("Pixel Bot"));
    assert!(builder("b99").is_none());
}

#[test]
fn post_lookup_by_id() {
    assert_eq!(post("a14").map(|p| p.title.as_str()), Some("Ramen Timer"));
    assert!(post("a99").is_none());
}

// =========================================================================
// Filters
// =========================================================================

#[test]
fn by_category_keeps_dataset_order() {
    assert_eq!(ids(&by_category(Category::Fun)), ["a1", "a14"]);
    assert_eq!(ids(&by_category(Category::Games)), ["a3", "a7", "a13"]);
}

#[test]
fn by_builder_keeps_dataset_order() {
    assert_eq!(ids(&by_builder("b2")), ["a1", "a9", "a16"]);
    assert!(by_builder("b99").is_empty());
}

#[test]
fn featured_is_the_flagged_subset_in_order() {
    assert_eq!(
        ids(&featured()),
        ["a1", "a2", "a3", "a5", "a7", "a9", "a10", "a11", "a14", "a16"]
    );
}

#[test]
fn ai_generated_follows_builder_kind() {
    assert_eq!(
        ids(&ai_generated()),
        ["a1", "a3", "a5", "a7", "a9", "a10", "a11", "a13", "a16"]
    );
}

// =========================================================================
// Trending
// =========================================================================

#[test]
fn trending_is_a_permutation_of_all_posts() {
    let ranked = trending();
    assert_eq!(ranked.len(), crate::seed::posts().len());
    let mut seen = ids(&ranked);
    seen.sort_unstable();
    let mut all: Vec<&str> = crate::seed::posts().iter().map(|p| p.id.as_str()).collect();
    all.sort_unstable();
    assert_eq!(seen, all);
}

#[test]
fn trending_scores_never_increase() {
    let ranked = trending();
    for pair in ranked.windows(2) {
        assert!(
            pair[0].trending_score() >= pair[1].trending_score(),
            "{} ranked above {} with a lower score",
            pair[0].id,
            pair[1].id
        );
    }
}

#[test]
fn trending_top_three() {
    // Meeting Cost's share count dominates; Color Wars and Wallpaper
    // Machine follow on raw volume.
    assert_eq!(ids(&trending())[..3], ["a11", "a7", "a10"]);
}

// =========================================================================
// Search
// =========================================================================

#[test]
fn search_is_case_insensitive_on_title_and_tagline() {
    let ramen = post("a14").unwrap();
    assert!(matches_query(ramen, "RAMEN"));
    assert!(matches_query(ramen, "noodle preferences"));
}

#[test]
fn search_covers_tags_and_tech_stack() {
    let split = post("a2").unwrap();
    assert!(matches_query(split, "ocr"));
    assert!(matches_query(split, "react native"));
}

#[test]
fn search_misses_unrelated_posts() {
    let breathe = post("a4").unwrap();
    assert!(!matches_query(breathe, "regex"));
}

#[test]
fn category_filter_composes_with_search() {
    let hits: Vec<&str> = by_category(Category::Fun)
        .into_iter()
        .filter(|p| matches_query(p, "ramen"))
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(hits, ["a14"]);
}
