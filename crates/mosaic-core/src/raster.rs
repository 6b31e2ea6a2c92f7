//! Tile rasterizer.
//!
//! Paints one frame in four passes: a black clear, one colored square per
//! tile, then a highlight pass and a shadow pass that each set their fill once
//! and revisit every tile. Fill changes dominate the cost on canvas backends,
//! so the overlays are grouped rather than interleaved with the tile fills.

use crate::constants::*;
use crate::field::{FrameField, Rgb8};
use crate::grid::{Grid, Rect};
use crate::playback::VisualMode;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    Solid(Rgb8),
    Translucent { rgb: Rgb8, alpha: f64 },
}

impl Fill {
    pub const HIGHLIGHT: Fill = Fill::Translucent {
        rgb: Rgb8::from_array(HIGHLIGHT_RGB),
        alpha: HIGHLIGHT_ALPHA,
    };
    pub const SHADOW: Fill = Fill::Translucent {
        rgb: Rgb8::from_array(SHADOW_RGB),
        alpha: SHADOW_ALPHA,
    };
    pub const BACKGROUND: Fill = Fill::Solid(Rgb8::from_array(BACKGROUND_RGB));

    /// CSS color string accepted by `CanvasRenderingContext2D.fillStyle`.
    pub fn css(&self) -> String {
        match self {
            Fill::Solid(c) => c.css(),
            Fill::Translucent { rgb, alpha } => {
                format!("rgba({},{},{},{})", rgb.r, rgb.g, rgb.b, alpha)
            }
        }
    }
}

/// Drawing context the rasterizer paints into.
pub trait Surface {
    fn set_fill(&mut self, fill: &Fill);
    fn fill_rect(&mut self, rect: Rect);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub tiles: usize,
    pub fill_changes: usize,
    pub rects: usize,
}

struct Counting<'a, S: Surface + ?Sized> {
    inner: &'a mut S,
    stats: FrameStats,
}

impl<S: Surface + ?Sized> Counting<'_, S> {
    fn set_fill(&mut self, fill: &Fill) {
        self.stats.fill_changes += 1;
        self.inner.set_fill(fill);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.stats.rects += 1;
        self.inner.fill_rect(rect);
    }
}

pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    width: f64,
    height: f64,
    clock_ms: f64,
    mode: VisualMode,
) -> FrameStats {
    let grid = Grid::for_surface(width, height);
    let mut out = Counting {
        inner: surface,
        stats: FrameStats {
            tiles: grid.len(),
            ..FrameStats::default()
        },
    };

    out.set_fill(&Fill::BACKGROUND);
    out.fill_rect(Rect::new(0.0, 0.0, width.max(0.0), height.max(0.0)));
    if grid.is_empty() {
        return out.stats;
    }

    let field = FrameField::at(clock_ms);
    for tile in grid.tiles() {
        out.set_fill(&Fill::Solid(field.tile_color(tile.x, tile.y, mode)));
        out.fill_rect(tile.rect);
    }

    out.set_fill(&Fill::HIGHLIGHT);
    for tile in grid.tiles() {
        let r = tile.rect;
        out.fill_rect(Rect::new(r.x, r.y, EDGE_WIDTH, r.h));
        out.fill_rect(Rect::new(r.x, r.y, r.w, EDGE_WIDTH));
    }

    out.set_fill(&Fill::SHADOW);
    for tile in grid.tiles() {
        let r = tile.rect;
        out.fill_rect(Rect::new(
            r.x + r.w - EDGE_WIDTH,
            r.y + EDGE_WIDTH,
            EDGE_WIDTH,
            r.h - EDGE_WIDTH,
        ));
        out.fill_rect(Rect::new(
            r.x + EDGE_WIDTH,
            r.y + r.h - EDGE_WIDTH,
            r.w - EDGE_WIDTH,
            EDGE_WIDTH,
        ));
    }

    out.stats
}
