//! Negative path mask: cells far from both the guide path and the border
//!
//! The mask starts as the complement of the path over the interior and is
//! then eroded. Any cell with a path cell or the grid edge inside its
//! `girth` window is cleared, leaving only cells that smoothing may force
//! closed.

use crate::spatial::grid::{Grid, Position};
use crate::spatial::raster::PathMask;

/// Boolean grid of cells forced to wall during smoothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeMask {
    cells: Grid<bool>,
}

impl NegativeMask {
    /// A mask of the given size with nothing blocked
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            cells: Grid::new(width, height),
        }
    }

    /// Build the eroded complement of `path` for a `width × height` cave
    pub fn build(path: &PathMask, width: usize, height: usize, girth: usize) -> Self {
        let mut mask = Self::open(width, height);

        for pos in mask.cells.interior_positions() {
            if !path.is_on_path(pos) {
                mask.block(pos);
            }
        }

        let girth = girth as i32;
        for pos in mask.cells.interior_positions() {
            if erosion_count(path, pos, width, height, girth) > 0 {
                mask.cells.set(pos, false);
            }
        }

        mask
    }

    /// Whether smoothing must force the cell to wall
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.cells.get(pos).copied().unwrap_or(false)
    }

    /// Mark a cell as blocked, returning whether it was in bounds
    pub fn block(&mut self, pos: Position) -> bool {
        self.cells.set(pos, true)
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.cells.count(|&blocked| blocked)
    }

    /// Width of the mask
    pub fn width(&self) -> usize {
        self.cells.width()
    }

    /// Height of the mask
    pub fn height(&self) -> usize {
        self.cells.height()
    }
}

/// Count edge and path cells in the `girth` window around `pos`
///
/// Window cells in column or row 0, or beyond the far edges, count as one
/// each. The cell's own path value is subtracted.
fn erosion_count(path: &PathMask, pos: Position, width: usize, height: usize, girth: i32) -> i32 {
    let [x, y] = pos;
    let (width, height) = (width as i32, height as i32);
    let mut count = 0;

    for dx in -girth..=girth {
        for dy in -girth..=girth {
            let (wx, wy) = (x + dx, y + dy);
            let at_edge = wx <= 0 || wy <= 0 || wx >= width || wy >= height;
            if at_edge || path.is_on_path([wx, wy]) {
                count += 1;
            }
        }
    }

    count - i32::from(path.is_on_path(pos))
}
