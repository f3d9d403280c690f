//! Shared dimensions and timing constants for the preview widgets.

// ── Canvas dimensions ───────────────────────────────────────────

/// Cells per side of the territory grid.
pub const GRID_SIZE: usize = 30;

/// Territory canvas edge length in CSS pixels (square).
pub const GRID_CANVAS_PX: u32 = 240;

/// Wallpaper canvas width in CSS pixels (phone aspect).
pub const WALLPAPER_WIDTH: u32 = 200;

/// Wallpaper canvas height in CSS pixels.
pub const WALLPAPER_HEIGHT: u32 = 320;

// ── Pattern drawing ─────────────────────────────────────────────

/// Global alpha while layering pattern geometry over the gradient.
pub const PATTERN_ALPHA: f64 = 0.15;

// ── Tick cadences ───────────────────────────────────────────────

/// Breathing guide advances one phase-second per tick.
pub const BREATH_TICK_MS: u32 = 1_000;

/// Meeting meter accrues in tenth-of-a-second steps.
pub const COST_TICK_MS: u32 = 100;

/// Ramen countdown decrements once per second.
pub const RAMEN_TICK_MS: u32 = 1_000;
