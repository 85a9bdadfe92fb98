//! Rasterization of guide curve points into the on-path mask
//!
//! Curve nodes are marked first, then the straight runs between consecutive
//! axis-aligned nodes are filled. Diagonal transitions between quadrants are
//! left open, so the mask can contain gaps where the scaled curve jumps.

use crate::spatial::grid::{Grid, MOORE_OFFSETS, Position};

/// Boolean grid of cells lying on the rasterized guide curve
///
/// The mask is square with side `max(width, height)` of the cave grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMask {
    cells: Grid<bool>,
}

impl PathMask {
    /// Create an empty mask of the given side length
    pub fn new(extent: usize) -> Self {
        Self {
            cells: Grid::new(extent, extent),
        }
    }

    /// Side length of the mask
    pub fn extent(&self) -> usize {
        self.cells.width()
    }

    /// Whether the cell is on the path; positions outside the mask are off
    pub fn is_on_path(&self, pos: Position) -> bool {
        self.cells.get(pos).copied().unwrap_or(false)
    }

    /// Mark a cell as on the path, returning whether it was in bounds
    pub fn mark(&mut self, pos: Position) -> bool {
        self.cells.set(pos, true)
    }

    /// Number of on-path cells in the 8-neighbourhood of `pos`
    pub fn moore_count(&self, pos: Position) -> usize {
        MOORE_OFFSETS
            .iter()
            .filter(|offset| self.is_on_path([pos[0] + offset[0], pos[1] + offset[1]]))
            .count()
    }

    /// Total number of on-path cells
    pub fn on_path_count(&self) -> usize {
        self.cells.count(|&on| on)
    }

    /// Every on-path position, column by column
    pub fn on_path_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.positions().filter(|&pos| self.is_on_path(pos))
    }
}

/// Build the path mask for a sequence of curve points
///
/// Every in-bounds point is marked. For each consecutive pair that shares
/// exactly one coordinate, the cells from the first point up to (but not
/// including) the second are marked as well; out-of-bounds cells are skipped.
pub fn rasterize(points: &[Position], extent: usize) -> PathMask {
    let mut mask = PathMask::new(extent);

    for &point in points {
        mask.mark(point);
    }

    for pair in points.windows(2) {
        let [current, next] = match pair {
            [current, next] => [*current, *next],
            _ => continue,
        };
        let dx = next[0] - current[0];
        let dy = next[1] - current[1];

        let (axis, distance) = match (dx, dy) {
            (0, 0) => continue,
            (0, dy) => (1, dy),
            (dx, 0) => (0, dx),
            _ => continue,
        };

        let step = distance.signum();
        for offset in 0..distance.abs() {
            let mut cell = current;
            if let Some(coordinate) = cell.get_mut(axis) {
                *coordinate += step * offset;
            }
            mask.mark(cell);
        }
    }

    mask
}
