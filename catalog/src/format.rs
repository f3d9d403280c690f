//! Compact display formatting for engagement counters.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Abbreviates a counter for card badges: `999`, `1.5K`, `2.3M`.
///
/// One decimal place is always kept above the thousands threshold, so
/// `1000` renders as `"1.0K"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compact_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
