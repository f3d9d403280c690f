//! Per-post engagement for the fullscreen navigator.
//!
//! The flat cards keep one boolean signal each, but the navigator walks
//! many posts in one session, so it tracks liked and saved ids in sets.
//! Nothing here persists or syncs. Counts shown in the UI are the seed
//! totals adjusted by these toggles, so a like always moves the number
//! by exactly one.

use std::collections::HashSet;

#[cfg(test)]
#[path = "engagement_test.rs"]
mod engagement_test;

/// Ids the visitor has toggled on during this session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngagementState {
    pub liked: HashSet<String>,
    pub saved: HashSet<String>,
}

impl EngagementState {
    pub fn toggle_like(&mut self, post_id: &str) {
        toggle(&mut self.liked, post_id);
    }

    #[must_use]
    pub fn is_liked(&self, post_id: &str) -> bool {
        self.liked.contains(post_id)
    }

    pub fn toggle_save(&mut self, post_id: &str) {
        toggle(&mut self.saved, post_id);
    }

    #[must_use]
    pub fn is_saved(&self, post_id: &str) -> bool {
        self.saved.contains(post_id)
    }
}

fn toggle(set: &mut HashSet<String>, id: &str) {
    if !set.remove(id) {
        set.insert(id.to_owned());
    }
}

/// Display count for a toggleable stat: the seed total plus one while
/// the visitor has it switched on.
#[must_use]
pub fn adjusted_count(base: u64, active: bool) -> u64 {
    if active { base + 1 } else { base }
}
