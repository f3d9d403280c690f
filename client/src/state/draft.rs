//! Draft state for the three-step "Post App" wizard.
//!
//! DESIGN
//! ======
//! The wizard is a guided demo of the posting flow. Analysis is canned;
//! nothing the visitor types is published or persisted. The draft lives
//! inside the wizard component, so closing it discards every field.

use catalog::model::Category;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

/// Gradient swatches offered in the customize step.
pub const GRADIENT_CHOICES: [&str; 8] = [
    "from-purple-600 via-pink-500 to-orange-400",
    "from-emerald-600 to-teal-500",
    "from-blue-600 to-cyan-500",
    "from-amber-500 to-orange-600",
    "from-rose-500 to-pink-600",
    "from-indigo-600 via-violet-500 to-fuchsia-500",
    "from-green-500 to-emerald-500",
    "from-slate-700 to-zinc-800",
];

/// Icon choices offered in the customize step.
pub const ICON_CHOICES: [&str; 12] = [
    "🚀", "⚡", "🎯", "🎨", "🔥", "💡", "🌟", "🎮", "🛠", "📊", "🌍", "🎉",
];

/// The wizard's three screens, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Connect,
    Customize,
    Preview,
}

impl WizardStep {
    /// Position in the step indicator, 1-based.
    #[must_use]
    pub fn number(self) -> usize {
        match self {
            Self::Connect => 1,
            Self::Customize => 2,
            Self::Preview => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Connect => "Connect",
            Self::Customize => "Customize",
            Self::Preview => "Preview",
        }
    }
}

/// What the (simulated) analysis service hands back for a connected app.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub category: Category,
}

/// The fixed result every analysis run produces in this prototype.
#[must_use]
pub fn canned_analysis() -> AnalysisResult {
    AnalysisResult {
        title: "My Awesome App".into(),
        tagline: "A delightful tool that solves a real problem".into(),
        description: "An intelligent app that uses modern web technologies to deliver \
                      a smooth, intuitive experience. Built with care and attention to detail."
            .into(),
        category: Category::Productivity,
    }
}

/// Everything the visitor has entered across the wizard's steps.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftState {
    pub step: WizardStep,
    pub repo_url: String,
    pub live_url: String,
    /// True while the fake analysis delay is running.
    pub analyzing: bool,
    /// True once analysis has filled the card fields.
    pub analyzed: bool,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub category: Category,
    pub gradient_index: usize,
    pub icon_index: usize,
}

impl Default for DraftState {
    fn default() -> Self {
        Self {
            step: WizardStep::Connect,
            repo_url: String::new(),
            live_url: String::new(),
            analyzing: false,
            analyzed: false,
            title: String::new(),
            tagline: String::new(),
            description: String::new(),
            category: Category::Fun,
            gradient_index: 0,
            icon_index: 0,
        }
    }
}

impl DraftState {
    /// Analysis needs at least one URL, ignoring stray whitespace.
    #[must_use]
    pub fn can_analyze(&self) -> bool {
        !self.repo_url.trim().is_empty() || !self.live_url.trim().is_empty()
    }

    /// Copies the analysis into the card fields and ends the analyzing
    /// state.
    pub fn apply_analysis(&mut self, analysis: AnalysisResult) {
        self.title = analysis.title;
        self.tagline = analysis.tagline;
        self.description = analysis.description;
        self.category = analysis.category;
        self.analyzing = false;
        self.analyzed = true;
    }

    /// Chosen gradient token for the preview card.
    #[must_use]
    pub fn gradient(&self) -> &'static str {
        GRADIENT_CHOICES
            .get(self.gradient_index)
            .copied()
            .unwrap_or(GRADIENT_CHOICES[0])
    }

    /// Chosen icon for the preview card.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        ICON_CHOICES.get(self.icon_index).copied().unwrap_or(ICON_CHOICES[0])
    }
}
