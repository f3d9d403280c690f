//! Feed page state: active filter, search query, and which overlay is open.
//!
//! DESIGN
//! ======
//! The feed never mutates the catalog. Filtering and card sizing are pure
//! functions over the static dataset so both render identically on the
//! server and after hydration.

use catalog::model::{AppPost, Category};
use catalog::{query, seed};

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

/// Which slice of the catalog the feed is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedFilter {
    /// Every post, in dataset order.
    #[default]
    All,
    /// Ranked by engagement score, highest first.
    Trending,
    /// Editorially featured posts.
    Featured,
    /// Posts built by AI agents.
    AiCreated,
    /// Posts in one category.
    Category(Category),
}

/// Rendered footprint of a feed card in the masonry grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardSize {
    #[default]
    Normal,
    /// Double-height card with a taller hero tile.
    Large,
}

/// Everything the feed page needs to render, shared via context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    pub filter: FeedFilter,
    pub search: String,
    /// Post id whose detail overlay is open, if any.
    pub selected_post_id: Option<String>,
    /// Builder id whose profile overlay is open, if any.
    pub selected_builder_id: Option<String>,
    pub show_post_wizard: bool,
    /// Index into the currently visible posts where immersive mode opened.
    pub fullscreen_index: Option<usize>,
}

impl FeedState {
    /// Posts visible under the current filter and search query.
    #[must_use]
    pub fn visible(&self) -> Vec<&'static AppPost> {
        visible_posts(self.filter, &self.search)
    }

    /// Whether any overlay is covering the feed.
    #[must_use]
    pub fn overlay_open(&self) -> bool {
        self.selected_post_id.is_some()
            || self.selected_builder_id.is_some()
            || self.show_post_wizard
            || self.fullscreen_index.is_some()
    }
}

/// Applies the filter, then narrows by search query.
///
/// Whitespace-only queries are ignored so a stray space never empties
/// the feed.
#[must_use]
pub fn visible_posts(filter: FeedFilter, search: &str) -> Vec<&'static AppPost> {
    let base: Vec<&'static AppPost> = match filter {
        FeedFilter::All => seed::posts().iter().collect(),
        FeedFilter::Trending => query::trending(),
        FeedFilter::Featured => query::featured(),
        FeedFilter::AiCreated => query::ai_generated(),
        FeedFilter::Category(category) => query::by_category(category),
    };
    let trimmed = search.trim();
    if trimmed.is_empty() {
        return base;
    }
    base.into_iter()
        .filter(|post| query::matches_query(post, trimmed))
        .collect()
}

/// Card footprint for a post at a grid position.
///
/// Featured posts near the top of the feed get a large card on every
/// third slot; past that, raw reach (views) earns the bigger tile.
#[must_use]
pub fn card_size(post: &AppPost, index: usize) -> CardSize {
    if post.featured && index < 6 {
        if index % 3 == 0 {
            return CardSize::Large;
        }
        return CardSize::Normal;
    }
    if post.views > 100_000 {
        return CardSize::Large;
    }
    CardSize::Normal
}
