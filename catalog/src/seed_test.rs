use super::*;
use std::collections::HashSet;

// =========================================================================
// Dataset shape
// =========================================================================

#[test]
fn eight_builders_sixteen_posts() {
    assert_eq!(builders().len(), 8);
    assert_eq!(posts().len(), 16);
}

#[test]
fn twenty_three_comments_total() {
    let total: usize = posts().iter().map(|p| p.comments.len()).sum();
    assert_eq!(total, 23);
}

#[test]
fn four_ai_agents_four_humans() {
    let ai = builders().iter().filter(|b| b.is_ai()).count();
    assert_eq!(ai, 4);
    assert_eq!(builders().len() - ai, 4);
}

#[test]
fn builder_ids_unique() {
    let ids: HashSet<&str> = builders().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids.len(), builders().len());
}

#[test]
fn post_ids_unique() {
    let ids: HashSet<&str> = posts().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), posts().len());
}

#[test]
fn comment_ids_unique_across_posts() {
    let ids: Vec<&str> = posts()
        .iter()
        .flat_map(|p| p.comments.iter().map(|c| c.id.as_str()))
        .collect();
    let unique: HashSet<&&str> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

// =========================================================================
// Referential integrity
// =========================================================================

#[test]
fn every_post_has_a_known_builder() {
    let ids: HashSet<&str> = builders().iter().map(|b| b.id.as_str()).collect();
    for post in posts() {
        assert!(
            ids.contains(post.builder_id.as_str()),
            "post {} references unknown builder {}",
            post.id,
            post.builder_id
        );
    }
}

#[test]
fn every_comment_has_a_known_author() {
    let ids: HashSet<&str> = builders().iter().map(|b| b.id.as_str()).collect();
    for post in posts() {
        for c in &post.comments {
            assert!(
                ids.contains(c.builder_id.as_str()),
                "comment {} references unknown builder {}",
                c.id,
                c.builder_id
            );
        }
    }
}

#[test]
fn ai_builders_carry_streak_and_model() {
    for b in builders() {
        if b.is_ai() {
            assert!(b.streak.is_some(), "{} missing streak", b.id);
            assert!(b.model.is_some(), "{} missing model", b.id);
        } else {
            assert!(b.streak.is_none(), "{} has unexpected streak", b.id);
            assert!(b.model.is_none(), "{} has unexpected model", b.id);
        }
    }
}

// =========================================================================
// Fields the feed pipeline depends on
// =========================================================================

#[test]
fn interactive_posts_name_a_component() {
    for post in posts() {
        match post.preview_type {
            PreviewKind::Interactive => assert!(
                post.preview_component.is_some(),
                "{} is interactive but names no component",
                post.id
            ),
            PreviewKind::Screenshot | PreviewKind::Video => assert!(
                post.preview_component.is_none(),
                "{} names a component it cannot mount",
                post.id
            ),
        }
    }
}

#[test]
fn ten_featured_posts() {
    assert_eq!(posts().iter().filter(|p| p.featured).count(), 10);
}

#[test]
fn iterated_posts_carry_engagement_delta() {
    for post in posts() {
        if post.iteration.is_some() {
            assert!(
                post.engagement_delta.is_some(),
                "{} iterated without a delta",
                post.id
            );
        }
    }
}

#[test]
fn timestamps_are_rfc3339_shaped() {
    for post in posts() {
        for ts in [&post.created_at, &post.updated_at] {
            assert!(ts.ends_with('Z'), "{} timestamp not UTC: {ts}", post.id);
            assert_eq!(ts.len(), 20, "{} timestamp malformed: {ts}", post.id);
        }
    }
}
