//! Tile grid derived from the surface size each frame.

use crate::constants::{TILE_INSET, TILE_PITCH, TILE_SIZE};

/// Axis-aligned rectangle in surface units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    pub tiles_x: u32,
    pub tiles_y: u32,
}

/// One grid cell as visited by the rasterizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub ix: u32,
    pub iy: u32,
    /// Normalized position: index / count along each axis.
    pub x: f64,
    pub y: f64,
    /// Painted square, inset from the cell origin.
    pub rect: Rect,
}

#[inline]
fn tiles_along(extent: f64) -> u32 {
    if !extent.is_finite() || extent <= 0.0 {
        return 0;
    }
    (extent / TILE_PITCH).ceil() as u32
}

impl Grid {
    /// Enough tiles to cover the surface, partially visible ones included.
    pub fn for_surface(width: f64, height: f64) -> Self {
        Self {
            tiles_x: tiles_along(width),
            tiles_y: tiles_along(height),
        }
    }

    pub fn len(&self) -> usize {
        self.tiles_x as usize * self.tiles_y as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tile(&self, ix: u32, iy: u32) -> Tile {
        Tile {
            ix,
            iy,
            x: ix as f64 / self.tiles_x as f64,
            y: iy as f64 / self.tiles_y as f64,
            rect: Rect::new(
                ix as f64 * TILE_PITCH + TILE_INSET,
                iy as f64 * TILE_PITCH + TILE_INSET,
                TILE_SIZE,
                TILE_SIZE,
            ),
        }
    }

    /// Column-major walk: x outer, y inner.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.tiles_x).flat_map(move |ix| (0..self.tiles_y).map(move |iy| self.tile(ix, iy)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_partial_tiles() {
        let g = Grid::for_surface(100.0, 50.0);
        assert_eq!(g, Grid { tiles_x: 5, tiles_y: 3 });
        assert_eq!(g.len(), 15);
    }

    #[test]
    fn exact_multiple_does_not_add_a_column() {
        assert_eq!(Grid::for_surface(48.0, 24.0), Grid { tiles_x: 2, tiles_y: 1 });
    }

    #[test]
    fn degenerate_surfaces_are_empty() {
        assert!(Grid::for_surface(0.0, 600.0).is_empty());
        assert!(Grid::for_surface(800.0, -1.0).is_empty());
        assert!(Grid::for_surface(f64::NAN, 10.0).is_empty());
        assert_eq!(Grid::for_surface(0.0, 0.0).tiles().count(), 0);
    }

    #[test]
    fn tile_geometry() {
        let g = Grid::for_surface(100.0, 50.0);
        let t = g.tile(2, 1);
        assert_eq!(t.rect, Rect::new(49.0, 25.0, 22.0, 22.0));
        assert!((t.x - 0.4).abs() < 1e-12);
        assert!((t.y - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn walk_is_column_major() {
        let g = Grid::for_surface(48.0, 48.0);
        let order: Vec<(u32, u32)> = g.tiles().map(|t| (t.ix, t.iy)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
