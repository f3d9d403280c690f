//! Record types for the app catalog.
//!
//! These types describe what is in the feed (`AppPost`, with embedded
//! `Comment`s) and who made it (`Builder`). They serialize to the camelCase
//! JSON shape the dataset has always used, so the read-only API emits records
//! byte-compatible with the original seed format.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`Category`] from its id string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown category id: {0}")]
pub struct ParseCategoryError(pub String);

/// The kind of creator behind a builder profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuilderKind {
    /// A human developer.
    Human,
    /// An autonomous agent that creates and iterates on apps continuously.
    AiAgent,
}

/// The attributed creator of app posts; human or AI-agent variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Builder {
    /// Unique identifier, e.g. `"b1"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Handle shown next to the name, e.g. `"@sarahbuilds"`.
    pub handle: String,
    /// Avatar emoji.
    pub avatar: String,
    /// Human or AI agent.
    #[serde(rename = "type")]
    pub kind: BuilderKind,
    /// Short profile bio.
    pub bio: String,
    /// Follower counter.
    pub followers: u64,
    /// Number of apps this builder has shipped.
    pub apps_created: u64,
    /// Days of consecutive app creation; AI agents only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,
    /// Name of the model powering the agent; AI agents only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Builder {
    /// Whether this builder is an AI agent.
    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.kind == BuilderKind::AiAgent
    }
}

/// A comment on an app post. Timestamps are pre-formatted display strings,
/// not clock values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique identifier, e.g. `"c1"`.
    pub id: String,
    /// Author reference into the builder table.
    pub builder_id: String,
    /// Comment body.
    pub text: String,
    /// Relative display timestamp, e.g. `"2h ago"`.
    pub timestamp: String,
    /// Like counter.
    pub likes: u64,
}

/// How a post's preview area is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    /// A live widget simulation runs inside the card.
    Interactive,
    /// Static screenshot stand-in (rendered as the post icon).
    Screenshot,
    /// Video stand-in (rendered as the post icon).
    Video,
}

/// A feed entry representing one showcased application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppPost {
    /// Unique identifier, e.g. `"a1"`.
    pub id: String,
    /// Creator reference into the builder table.
    pub builder_id: String,
    /// App name.
    pub title: String,
    /// One-line pitch shown on the card.
    pub tagline: String,
    /// Longer description shown in the detail view.
    pub description: String,
    /// Category this post files under.
    pub category: Category,
    /// Free-text tags (stored lowercase).
    pub tags: Vec<String>,
    /// Gradient class for the card background.
    pub gradient: String,
    /// Icon emoji shown on the preview tile.
    pub icon: String,
    /// Accessibility description of the preview imagery.
    pub screenshot_alt: String,
    /// Preview rendering mode.
    pub preview_type: PreviewKind,
    /// Widget tag for interactive previews. Unknown tags fall back to the
    /// icon; only a handful of tags have mini implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_component: Option<String>,
    /// Deployed app URL, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Like counter.
    pub likes: u64,
    /// Embedded ordered comment list.
    pub comments: Vec<Comment>,
    /// Save counter.
    pub saves: u64,
    /// View counter.
    pub views: u64,
    /// Share counter.
    pub shares: u64,
    /// Technologies the app is built with.
    pub tech_stack: Vec<String>,
    /// Repository URL, when public.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Creation timestamp (pre-formatted string).
    pub created_at: String,
    /// Last-update timestamp (pre-formatted string).
    pub updated_at: String,
    /// Whether the post is editorially featured.
    pub featured: bool,
    /// Version number for AI-iterated apps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration: Option<u32>,
    /// Prior version this post was iterated from. May name a retired version
    /// that is no longer in the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_app_id: Option<String>,
    /// Percent engagement change from the parent version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_delta: Option<u32>,
}

impl AppPost {
    /// Fixed linear trending score: `likes + 2·saves + 3·shares`.
    #[must_use]
    pub fn trending_score(&self) -> u64 {
        self.likes + self.saves * 2 + self.shares * 3
    }

    /// Whether the preview area hosts a live widget.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.preview_type == PreviewKind::Interactive
    }
}

/// Fixed category enumeration for app posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Productivity,
    Fun,
    DeveloperTools,
    Finance,
    Health,
    Social,
    Education,
    Creative,
    AiPowered,
    Games,
    Utilities,
    B2b,
}

/// Display metadata for one category chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    /// The category this row describes.
    pub id: Category,
    /// Chip label.
    pub label: &'static str,
    /// Chip icon emoji.
    pub icon: &'static str,
    /// Gradient color class associated with the category.
    pub color: &'static str,
}

/// Category display table, in feed chip order.
pub const CATEGORIES: [CategoryMeta; 12] = [
    CategoryMeta { id: Category::Fun, label: "Fun", icon: "🎉", color: "from-pink-500 to-rose-500" },
    CategoryMeta {
        id: Category::Productivity,
        label: "Productivity",
        icon: "⚡",
        color: "from-blue-500 to-cyan-500",
    },
    CategoryMeta {
        id: Category::AiPowered,
        label: "AI-Powered",
        icon: "🤖",
        color: "from-violet-500 to-purple-500",
    },
    CategoryMeta {
        id: Category::Games,
        label: "Games",
        icon: "🎮",
        color: "from-green-500 to-emerald-500",
    },
    CategoryMeta {
        id: Category::Creative,
        label: "Creative",
        icon: "🎨",
        color: "from-orange-500 to-amber-500",
    },
    CategoryMeta {
        id: Category::DeveloperTools,
        label: "Dev Tools",
        icon: "🛠",
        color: "from-slate-500 to-zinc-500",
    },
    CategoryMeta {
        id: Category::Finance,
        label: "Finance",
        icon: "💰",
        color: "from-emerald-500 to-teal-500",
    },
    CategoryMeta {
        id: Category::Health,
        label: "Health",
        icon: "🏃",
        color: "from-red-500 to-pink-500",
    },
    CategoryMeta {
        id: Category::Social,
        label: "Social",
        icon: "💬",
        color: "from-indigo-500 to-blue-500",
    },
    CategoryMeta {
        id: Category::Education,
        label: "Education",
        icon: "📚",
        color: "from-yellow-500 to-orange-500",
    },
    CategoryMeta {
        id: Category::Utilities,
        label: "Utilities",
        icon: "🔧",
        color: "from-gray-500 to-slate-500",
    },
    CategoryMeta {
        id: Category::B2b,
        label: "B2B",
        icon: "🏢",
        color: "from-teal-500 to-cyan-500",
    },
];

impl Category {
    /// Stable kebab-case id string, e.g. `"developer-tools"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Productivity => "productivity",
            Self::Fun => "fun",
            Self::DeveloperTools => "developer-tools",
            Self::Finance => "finance",
            Self::Health => "health",
            Self::Social => "social",
            Self::Education => "education",
            Self::Creative => "creative",
            Self::AiPowered => "ai-powered",
            Self::Games => "games",
            Self::Utilities => "utilities",
            Self::B2b => "b2b",
        }
    }

    /// Display metadata row for this category.
    #[must_use]
    pub fn meta(self) -> &'static CategoryMeta {
        // The table covers every variant, so the scan always finds a row.
        CATEGORIES
            .iter()
            .find(|m| m.id == self)
            .unwrap_or(&CATEGORIES[0])
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "productivity" => Ok(Self::Productivity),
            "fun" => Ok(Self::Fun),
            "developer-tools" => Ok(Self::DeveloperTools),
            "finance" => Ok(Self::Finance),
            "health" => Ok(Self::Health),
            "social" => Ok(Self::Social),
            "education" => Ok(Self::Education),
            "creative" => Ok(Self::Creative),
            "ai-powered" => Ok(Self::AiPowered),
            "games" => Ok(Self::Games),
            "utilities" => Ok(Self::Utilities),
            "b2b" => Ok(Self::B2b),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
