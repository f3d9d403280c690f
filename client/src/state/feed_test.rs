use super::*;

// =============================================================
// FeedState defaults
// =============================================================

#[test]
fn feed_state_default_shows_everything() {
    let state = FeedState::default();
    assert_eq!(state.filter, FeedFilter::All);
    assert!(state.search.is_empty());
    assert_eq!(state.selected_post_id, None);
    assert_eq!(state.selected_builder_id, None);
    assert!(!state.show_post_wizard);
    assert_eq!(state.fullscreen_index, None);
}

#[test]
fn feed_state_default_has_no_overlay() {
    assert!(!FeedState::default().overlay_open());
}

#[test]
fn feed_state_overlay_open_for_each_surface() {
    let detail = FeedState {
        selected_post_id: Some("a1".into()),
        ..FeedState::default()
    };
    assert!(detail.overlay_open());

    let profile = FeedState {
        selected_builder_id: Some("b2".into()),
        ..FeedState::default()
    };
    assert!(profile.overlay_open());

    let wizard = FeedState {
        show_post_wizard: true,
        ..FeedState::default()
    };
    assert!(wizard.overlay_open());

    let immersive = FeedState {
        fullscreen_index: Some(0),
        ..FeedState::default()
    };
    assert!(immersive.overlay_open());
}

// =============================================================
// visible_posts
// =============================================================

#[test]
fn all_filter_returns_whole_catalog_in_order() {
    let posts = visible_posts(FeedFilter::All, "");
    assert_eq!(posts.len(), catalog::seed::posts().len());
    assert_eq!(posts[0].id, "a1");
}

#[test]
fn trending_filter_ranks_by_score() {
    let posts = visible_posts(FeedFilter::Trending, "");
    assert_eq!(posts.len(), catalog::seed::posts().len());
    for pair in posts.windows(2) {
        assert!(pair[0].trending_score() >= pair[1].trending_score());
    }
}

#[test]
fn featured_filter_keeps_only_featured() {
    let posts = visible_posts(FeedFilter::Featured, "");
    assert!(!posts.is_empty());
    assert!(posts.iter().all(|p| p.featured));
}

#[test]
fn ai_created_filter_keeps_only_agent_posts() {
    let posts = visible_posts(FeedFilter::AiCreated, "");
    assert!(!posts.is_empty());
    for post in posts {
        let builder = catalog::query::builder(&post.builder_id);
        assert!(builder.is_some_and(catalog::model::Builder::is_ai));
    }
}

#[test]
fn category_filter_narrows_to_one_category() {
    let posts = visible_posts(FeedFilter::Category(Category::Fun), "");
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a1", "a14"]);
}

#[test]
fn search_narrows_within_the_active_filter() {
    let posts = visible_posts(FeedFilter::Category(Category::Fun), "ramen");
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a14"]);
}

#[test]
fn whitespace_only_search_is_ignored() {
    let blank = visible_posts(FeedFilter::All, "   ");
    assert_eq!(blank.len(), catalog::seed::posts().len());
}

#[test]
fn search_query_is_trimmed_before_matching() {
    let posts = visible_posts(FeedFilter::All, "  ramen  ");
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a14"]);
}

#[test]
fn unmatched_search_empties_the_feed() {
    let posts = visible_posts(FeedFilter::All, "zzz-no-such-app");
    assert!(posts.is_empty());
}

// =============================================================
// card_size
// =============================================================

#[test]
fn featured_posts_go_large_on_every_third_top_slot() {
    let featured = catalog::query::featured();
    let post = featured[0];
    assert_eq!(card_size(post, 0), CardSize::Large);
    assert_eq!(card_size(post, 1), CardSize::Normal);
    assert_eq!(card_size(post, 2), CardSize::Normal);
    assert_eq!(card_size(post, 3), CardSize::Large);
}

#[test]
fn high_reach_posts_go_large_past_the_top_slots() {
    // a11 has well over 100k views and is featured.
    let post = catalog::query::post("a11").unwrap();
    assert_eq!(card_size(post, 7), CardSize::Large);
}

#[test]
fn ordinary_posts_stay_normal() {
    // a4 is unfeatured with under 100k views.
    let post = catalog::query::post("a4").unwrap();
    assert_eq!(card_size(post, 0), CardSize::Normal);
    assert_eq!(card_size(post, 9), CardSize::Normal);
}

#[test]
fn featured_slot_policy_beats_view_count_in_the_top_rows() {
    // a11 is featured, so slot 1 renders normal even at 234k views.
    let post = catalog::query::post("a11").unwrap();
    assert_eq!(card_size(post, 1), CardSize::Normal);
}
