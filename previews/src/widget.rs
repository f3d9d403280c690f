//! Registry of preview tags that have a live widget implementation.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

/// The six preview tags with working mini implementations.
///
/// Posts carry free-form component tags; anything not listed here falls back
/// to the static icon tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Text input shifts the background hue by sentiment.
    MoodRing,
    /// Pulsing inhale/hold/exhale circle.
    Breathe,
    /// Live meeting cost counter.
    MeetingCost,
    /// Click-to-claim pixel territory canvas.
    ColorWars,
    /// Procedural wallpaper generated from a seed word.
    WallpaperMachine,
    /// Noodle firmness selector with countdown.
    RamenTimer,
}

impl WidgetKind {
    /// Resolves a post's preview tag, or `None` for tags without a widget.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "MoodRing" => Some(Self::MoodRing),
            "Breathe" => Some(Self::Breathe),
            "MeetingCost" => Some(Self::MeetingCost),
            "ColorWars" => Some(Self::ColorWars),
            "WallpaperMachine" => Some(Self::WallpaperMachine),
            "RamenTimer" => Some(Self::RamenTimer),
            _ => None,
        }
    }

    /// The tag string this widget is registered under.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::MoodRing => "MoodRing",
            Self::Breathe => "Breathe",
            Self::MeetingCost => "MeetingCost",
            Self::ColorWars => "ColorWars",
            Self::WallpaperMachine => "WallpaperMachine",
            Self::RamenTimer => "RamenTimer",
        }
    }
}
