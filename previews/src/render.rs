//! Canvas 2D drawing for the grid and wallpaper widgets.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives prepared state (a territory grid, a wallpaper spec) and
//! produces pixels without mutating anything.
//!
//! Fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! the host component decides whether a failed frame matters.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{GRID_SIZE, PATTERN_ALPHA};
use crate::grid::TerritoryGrid;
use crate::wallpaper::{self, PatternKind, WallpaperSpec};

/// Paints every cell of the territory grid.
///
/// `width` and `height` are the canvas dimensions in pixels; cells stretch
/// to fill them exactly.
#[allow(clippy::cast_precision_loss)]
pub fn draw_grid(ctx: &CanvasRenderingContext2d, grid: &TerritoryGrid, width: f64, height: f64) {
    let cell_w = width / GRID_SIZE as f64;
    let cell_h = height / GRID_SIZE as f64;
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            ctx.set_fill_style_str(grid.color_at(col, row));
            ctx.fill_rect(col as f64 * cell_w, row as f64 * cell_h, cell_w, cell_h);
        }
    }
}

/// Paints a full wallpaper: background gradient, then the pattern layer.
///
/// # Errors
///
/// Returns `Err` if a gradient stop or arc call is rejected by the canvas.
pub fn draw_wallpaper(
    ctx: &CanvasRenderingContext2d,
    spec: &WallpaperSpec,
    width: u32,
    height: u32,
) -> Result<(), JsValue> {
    let w = f64::from(width);
    let h = f64::from(height);

    let gradient = ctx.create_linear_gradient(0.0, 0.0, w, h);
    for (offset, color) in spec.gradient_stops() {
        gradient.add_color_stop(offset, &color)?;
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_global_alpha(PATTERN_ALPHA);
    match spec.pattern {
        PatternKind::Circles => {
            for c in wallpaper::circles(spec, width, height) {
                ctx.begin_path();
                ctx.arc(f64::from(c.x), f64::from(c.y), f64::from(c.radius), 0.0, TAU)?;
                ctx.set_fill_style_str(&format!("hsl({}, 80%, 70%)", c.hue));
                ctx.fill();
            }
        }
        PatternKind::Lines => {
            for l in wallpaper::lines(spec, width) {
                ctx.begin_path();
                ctx.move_to(f64::from(l.x_top), 0.0);
                ctx.line_to(f64::from(l.x_bottom), h);
                ctx.set_stroke_style_str(&format!("hsl({}, 70%, 60%)", l.hue));
                ctx.set_line_width(f64::from(l.width));
                ctx.stroke();
            }
        }
        PatternKind::Triangles => {
            for t in wallpaper::triangles(spec, width, height) {
                let (x, y, s) = (f64::from(t.x), f64::from(t.y), f64::from(t.size));
                ctx.begin_path();
                ctx.move_to(x, y - s);
                ctx.line_to(x - s, y + s);
                ctx.line_to(x + s, y + s);
                ctx.close_path();
                ctx.set_fill_style_str(&format!("hsl({}, 60%, 60%)", t.hue));
                ctx.fill();
            }
        }
        PatternKind::Dots => {
            for d in wallpaper::dots(spec, width, height) {
                ctx.begin_path();
                ctx.arc(f64::from(d.x), f64::from(d.y), f64::from(d.radius), 0.0, TAU)?;
                ctx.set_fill_style_str(&format!("hsl({}, 60%, 70%)", d.hue));
                ctx.fill();
            }
        }
    }
    ctx.set_global_alpha(1.0);

    Ok(())
}
