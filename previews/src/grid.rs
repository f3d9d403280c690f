//! Territory grid for the color war canvas.
//!
//! A 30×30 grid of palette indices. Cells start in random colors; each
//! click claims a 3×3 block around the hit cell in the player's color,
//! clipped at the edges. There is no server behind the simulation, so
//! "multiplayer" is just the random starting terrain.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::GRID_SIZE;

/// The six claimable territory colors.
pub const WAR_COLORS: [&str; 6] =
    ["#ef4444", "#3b82f6", "#22c55e", "#eab308", "#a855f7", "#f97316"];

/// Fill used if a cell index ever escapes the palette.
const FALLBACK_COLOR: &str = "#333";

/// Row-major grid of palette indices.
#[derive(Debug, Clone)]
pub struct TerritoryGrid {
    cells: Vec<u8>,
}

impl TerritoryGrid {
    /// Builds a grid with every cell in a random palette color.
    ///
    /// `rng` yields uniform values in `[0, 1)`; the host passes
    /// `js_sys::Math::random` and tests pass a scripted sequence.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn random(mut rng: impl FnMut() -> f64) -> Self {
        let palette_len = WAR_COLORS.len() as f64;
        let cells = (0..GRID_SIZE * GRID_SIZE)
            .map(|_| {
                let pick = (rng() * palette_len).floor() as usize;
                pick.min(WAR_COLORS.len() - 1) as u8
            })
            .collect();
        Self { cells }
    }

    /// Claims the 3×3 block centered on (`col`, `row`).
    ///
    /// Out-of-range centers are ignored entirely; in-range centers have
    /// their off-grid neighbors clipped.
    pub fn claim(&mut self, col: i32, row: i32, color: u8) {
        let side = grid_side_i32();
        if !(0..side).contains(&col) || !(0..side).contains(&row) {
            return;
        }
        for dy in -1..=1 {
            for dx in -1..=1 {
                let (nc, nr) = (col + dx, row + dy);
                if (0..side).contains(&nc) && (0..side).contains(&nr) {
                    #[allow(clippy::cast_sign_loss)]
                    let idx = nr as usize * GRID_SIZE + nc as usize;
                    self.cells[idx] = color;
                }
            }
        }
    }

    /// CSS color of the cell at (`col`, `row`).
    #[must_use]
    pub fn color_at(&self, col: usize, row: usize) -> &'static str {
        self.cells
            .get(row * GRID_SIZE + col)
            .and_then(|&i| WAR_COLORS.get(usize::from(i)))
            .copied()
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Palette index of the cell at (`col`, `row`), if in range.
    #[must_use]
    pub fn cell(&self, col: usize, row: usize) -> Option<u8> {
        if col >= GRID_SIZE {
            return None;
        }
        self.cells.get(row * GRID_SIZE + col).copied()
    }
}

/// Maps a pointer offset within the canvas to a cell coordinate.
///
/// Mirrors the grid claim rule: results may land outside `0..30` (including
/// exactly on the far edge) and are rejected by [`TerritoryGrid::claim`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn cell_at(offset: f64, extent: f64) -> i32 {
    ((offset / extent) * GRID_SIZE as f64).floor() as i32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn grid_side_i32() -> i32 {
    GRID_SIZE as i32
}
