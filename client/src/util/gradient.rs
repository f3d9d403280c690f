//! Gradient token rendering.
//!
//! Catalog entries carry their visual identity as Tailwind-style gradient
//! tokens (`from-purple-600 via-pink-500 to-orange-400`). This module
//! resolves those tokens into plain CSS so cards can paint them with an
//! inline `background` style.

#[cfg(test)]
#[path = "gradient_test.rs"]
mod gradient_test;

/// Background used when a token resolves to no known color stops.
const FALLBACK: &str = "linear-gradient(135deg, #475569, #27272a)";

/// Render a gradient token as a CSS `linear-gradient` value.
///
/// Unknown words and unknown color names are skipped; a token with no
/// usable stops falls back to a neutral slate gradient.
pub fn gradient_css(token: &str) -> String {
    let stops: Vec<&'static str> = token.split_whitespace().filter_map(stop_color).collect();
    match stops.as_slice() {
        [] => FALLBACK.to_owned(),
        [only] => format!("linear-gradient(135deg, {only}, {only})"),
        many => format!("linear-gradient(135deg, {})", many.join(", ")),
    }
}

/// Resolve one token word (`from-`/`via-`/`to-` prefixed) to a hex color.
fn stop_color(word: &str) -> Option<&'static str> {
    let name = word
        .strip_prefix("from-")
        .or_else(|| word.strip_prefix("via-"))
        .or_else(|| word.strip_prefix("to-"))?;
    palette(name)
}

/// Tailwind palette entries used by the catalog's gradient tokens.
fn palette(name: &str) -> Option<&'static str> {
    let hex = match name {
        "amber-300" => "#fcd34d",
        "amber-400" => "#fbbf24",
        "amber-500" => "#f59e0b",
        "blue-500" => "#3b82f6",
        "blue-600" => "#2563eb",
        "blue-700" => "#1d4ed8",
        "cyan-500" => "#06b6d4",
        "cyan-600" => "#0891b2",
        "emerald-400" => "#34d399",
        "emerald-500" => "#10b981",
        "emerald-600" => "#059669",
        "fuchsia-500" => "#d946ef",
        "gray-500" => "#6b7280",
        "gray-700" => "#374151",
        "gray-900" => "#111827",
        "green-500" => "#22c55e",
        "green-600" => "#16a34a",
        "indigo-500" => "#6366f1",
        "indigo-600" => "#4f46e5",
        "lime-400" => "#a3e635",
        "orange-400" => "#fb923c",
        "orange-500" => "#f97316",
        "orange-600" => "#ea580c",
        "pink-400" => "#f472b6",
        "pink-500" => "#ec4899",
        "pink-600" => "#db2777",
        "purple-500" => "#a855f7",
        "purple-600" => "#9333ea",
        "purple-900" => "#581c87",
        "red-500" => "#ef4444",
        "red-600" => "#dc2626",
        "rose-300" => "#fda4af",
        "rose-500" => "#f43f5e",
        "rose-700" => "#be123c",
        "sky-400" => "#38bdf8",
        "slate-500" => "#64748b",
        "slate-600" => "#475569",
        "slate-700" => "#334155",
        "teal-500" => "#14b8a6",
        "violet-500" => "#8b5cf6",
        "violet-600" => "#7c3aed",
        "violet-800" => "#5b21b6",
        "yellow-500" => "#eab308",
        "zinc-500" => "#71717a",
        "zinc-600" => "#52525b",
        "zinc-700" => "#3f3f46",
        "zinc-800" => "#27272a",
        _ => return None,
    };
    Some(hex)
}
