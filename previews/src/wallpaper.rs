//! Seed-word hashing and procedural wallpaper geometry.
//!
//! The whole wallpaper derives from one integer hash of the seed word:
//! three gradient hues, a pattern family, and every shape position. The
//! same word always yields the same wallpaper, and the hash matches the
//! widely-used JavaScript string hash (31x accumulate over UTF-16 code
//! units, truncated to 32 bits each step) so seeds produce the imagery
//! users have already shared.
//!
//! Positions stay exact in `u64`: the largest intermediate product is
//! seed (< 2^31) times a small index times a prime, far below overflow.

#[cfg(test)]
#[path = "wallpaper_test.rs"]
mod wallpaper_test;

/// Shapes layered over the gradient, selected by `seed % 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Scattered translucent discs.
    Circles,
    /// Slanted full-height strokes.
    Lines,
    /// Scattered triangles.
    Triangles,
    /// A regular lattice of small dots.
    Dots,
}

/// Everything needed to draw one wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallpaperSpec {
    /// Hash of the seed word; drives all geometry.
    pub seed: u64,
    /// Gradient start hue.
    pub hue1: u64,
    /// Gradient midpoint hue.
    pub hue2: u64,
    /// Gradient end hue.
    pub hue3: u64,
    /// Which pattern family to layer on top.
    pub pattern: PatternKind,
}

impl WallpaperSpec {
    /// Derives the full spec from a seed word.
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let seed = seed_hash(word);
        Self {
            seed,
            hue1: seed % 360,
            hue2: seed * 7 % 360,
            hue3: seed * 13 % 360,
            pattern: match seed % 4 {
                0 => PatternKind::Circles,
                1 => PatternKind::Lines,
                2 => PatternKind::Triangles,
                _ => PatternKind::Dots,
            },
        }
    }

    /// Background gradient stops as (offset, CSS color) pairs.
    #[must_use]
    pub fn gradient_stops(&self) -> [(f32, String); 3] {
        [
            (0.0, format!("hsl({}, 70%, 50%)", self.hue1)),
            (0.5, format!("hsl({}, 60%, 40%)", self.hue2)),
            (1.0, format!("hsl({}, 80%, 30%)", self.hue3)),
        ]
    }
}

/// Hashes a seed word to a non-negative integer.
///
/// Accumulates `hash * 31 + unit` over UTF-16 code units with 32-bit
/// signed truncation each step, then takes the absolute value. Always
/// below 2^31.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn seed_hash(word: &str) -> u64 {
    let mut hash: i32 = 0;
    for unit in word.encode_utf16() {
        let step = i64::from(hash.wrapping_shl(5)) - i64::from(hash) + i64::from(unit);
        hash = step as i32;
    }
    u64::from(hash.unsigned_abs())
}

// ── Pattern geometry ────────────────────────────────────────────
//
// Coordinates fit i32 comfortably: every value is reduced modulo the
// canvas extent (or is a small size offset) before conversion.

/// A translucent disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub hue: u64,
}

/// A full-height slanted stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// X at the top edge.
    pub x_top: i32,
    /// X at the bottom edge.
    pub x_bottom: i32,
    /// Stroke width in pixels.
    pub width: i32,
    pub hue: u64,
}

/// An isosceles triangle anchored at its centroid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub x: i32,
    pub y: i32,
    /// Half-base and apex offset in pixels.
    pub size: i32,
    pub hue: u64,
}

/// One lattice dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub hue: u64,
}

/// The 20 discs for [`PatternKind::Circles`].
#[must_use]
pub fn circles(spec: &WallpaperSpec, width: u32, height: u32) -> Vec<Circle> {
    let (w, h) = (u64::from(width), u64::from(height));
    (0..20u64)
        .map(|i| {
            let k = spec.seed * (i + 1);
            Circle {
                x: to_i32(k * 17 % w),
                y: to_i32(k * 31 % h),
                radius: to_i32(10 + k % 40),
                hue: (spec.hue1 + i * 20) % 360,
            }
        })
        .collect()
}

/// The 15 strokes for [`PatternKind::Lines`].
#[must_use]
pub fn lines(spec: &WallpaperSpec, width: u32) -> Vec<Line> {
    let w = u64::from(width);
    (0..15u64)
        .map(|i| {
            let k = spec.seed * (i + 1);
            Line {
                x_top: to_i32(k * 13 % w),
                x_bottom: to_i32(k * 23 % w),
                width: to_i32(2 + i % 4),
                hue: (spec.hue2 + i * 25) % 360,
            }
        })
        .collect()
}

/// The 12 triangles for [`PatternKind::Triangles`].
#[must_use]
pub fn triangles(spec: &WallpaperSpec, width: u32, height: u32) -> Vec<Triangle> {
    let (w, h) = (u64::from(width), u64::from(height));
    (0..12u64)
        .map(|i| {
            let k = spec.seed * (i + 1);
            Triangle {
                x: to_i32(k * 19 % w),
                y: to_i32(k * 29 % h),
                size: to_i32(20 + k % 50),
                hue: (spec.hue3 + i * 30) % 360,
            }
        })
        .collect()
}

/// The dot lattice for [`PatternKind::Dots`], on a 20px step.
#[must_use]
pub fn dots(spec: &WallpaperSpec, width: u32, height: u32) -> Vec<Dot> {
    let step = 20u32;
    let mut out = Vec::new();
    let mut x = 0;
    while x < width {
        let mut y = 0;
        while y < height {
            let sum = spec.seed + u64::from(x) + u64::from(y);
            out.push(Dot {
                x: to_i32(u64::from(x)),
                y: to_i32(u64::from(y)),
                radius: to_i32(2 + sum % 5),
                hue: (spec.hue1 + u64::from(x) + u64::from(y)) % 360,
            });
            y += step;
        }
        x += step;
    }
    out
}

// Inputs are already reduced below the canvas extent.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn to_i32(v: u64) -> i32 {
    v as i32
}
