//! Read-side helpers over the seed dataset.
//!
//! Everything here borrows from the static seed tables; callers get
//! `&'static` records and never pay for a clone. Filters that return
//! multiple posts preserve dataset order except for [`trending`], which
//! re-ranks by engagement.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::model::{AppPost, Builder, Category};
use crate::seed;

/// Looks up a builder by id.
#[must_use]
pub fn builder(id: &str) -> Option<&'static Builder> {
    seed::builders().iter().find(|b| b.id == id)
}

/// Looks up a post by id.
#[must_use]
pub fn post(id: &str) -> Option<&'static AppPost> {
    seed::posts().iter().find(|p| p.id == id)
}

/// Posts in the given category, in dataset order.
#[must_use]
pub fn by_category(category: Category) -> Vec<&'static AppPost> {
    seed::posts().iter().filter(|p| p.category == category).collect()
}

/// Posts published by the given builder, in dataset order.
#[must_use]
pub fn by_builder(builder_id: &str) -> Vec<&'static AppPost> {
    seed::posts().iter().filter(|p| p.builder_id == builder_id).collect()
}

/// Posts flagged as featured, in dataset order.
#[must_use]
pub fn featured() -> Vec<&'static AppPost> {
    seed::posts().iter().filter(|p| p.featured).collect()
}

/// Posts whose builder is an AI agent, in dataset order.
///
/// A post whose `builder_id` resolves to no builder is treated as
/// human-made and excluded.
#[must_use]
pub fn ai_generated() -> Vec<&'static AppPost> {
    seed::posts()
        .iter()
        .filter(|p| builder(&p.builder_id).is_some_and(Builder::is_ai))
        .collect()
}

/// All posts ranked by engagement, highest first.
///
/// The sort is stable, so posts with equal scores keep their dataset
/// order.
#[must_use]
pub fn trending() -> Vec<&'static AppPost> {
    let mut ranked: Vec<&'static AppPost> = seed::posts().iter().collect();
    ranked.sort_by(|a, b| b.trending_score().cmp(&a.trending_score()));
    ranked
}

/// Whether a post matches a free-text search query.
///
/// Title, tagline, and tech stack are compared case-insensitively; tags
/// are matched as stored against the lowercased query, which works
/// because the seed data keeps tags lowercase. Callers are expected to
/// skip the filter entirely for whitespace-only queries.
#[must_use]
pub fn matches_query(post: &AppPost, query: &str) -> bool {
    let q = query.to_lowercase();
    post.title.to_lowercase().contains(&q)
        || post.tagline.to_lowercase().contains(&q)
        || post.tags.iter().any(|tag| tag.contains(&q))
        || post.tech_stack.iter().any(|t| t.to_lowercase().contains(&q))
}
