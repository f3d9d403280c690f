//! Sentiment-to-hue mapping for the mood ring.
//!
//! Keyword spotting, not a real classifier. The input is lowercased and each
//! mood group is checked for a substring hit in a fixed order; when several
//! groups match, the later group wins.

#[cfg(test)]
#[path = "mood_test.rs"]
mod mood_test;

/// Hue shown before any text is typed (purple).
pub const NEUTRAL_HUE: u16 = 270;

const HAPPY: &[&str] = &[
    "happy", "joy", "love", "great", "amazing", "wonderful", "good", "smile", "laugh", "fun",
    "yes", "!", "😊", "❤️",
];
const SAD: &[&str] =
    &["sad", "cry", "lonely", "hurt", "pain", "miss", "lost", "dark", "gray", "sorry"];
const ANGRY: &[&str] =
    &["angry", "hate", "rage", "furious", "mad", "annoyed", "ugh", "damn", "terrible"];
const CALM: &[&str] =
    &["calm", "peace", "gentle", "quiet", "serene", "breathe", "relax", "soft", "still"];
const ENERGETIC: &[&str] =
    &["energy", "excited", "pump", "run", "go", "fast", "wild", "party", "dance"];

/// Mood groups paired with their hue, in override order.
const MOOD_GROUPS: [(&[&str], u16); 5] =
    [(HAPPY, 50), (SAD, 220), (ANGRY, 0), (CALM, 180), (ENERGETIC, 30)];

/// The hue for a piece of text. Empty or unmatched text reads as neutral.
#[must_use]
pub fn mood_hue(text: &str) -> u16 {
    if text.is_empty() {
        return NEUTRAL_HUE;
    }
    let lower = text.to_lowercase();
    let mut hue = NEUTRAL_HUE;
    for (words, group_hue) in MOOD_GROUPS {
        if words.iter().any(|w| lower.contains(w)) {
            hue = group_hue;
        }
    }
    hue
}

/// CSS background color for the given text.
#[must_use]
pub fn mood_color(text: &str) -> String {
    format!("hsl({}, 70%, 60%)", mood_hue(text))
}
