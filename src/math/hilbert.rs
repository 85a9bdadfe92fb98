//! Hilbert guide curve generation by recursive quadrant subdivision
//!
//! The curve is produced in a continuous `extent × extent` square, then each
//! quadrant midpoint is truncated to an integer cell, scaled by the spacing
//! factor and shifted by the layout offset.

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Position;

/// Placement of the guide curve on the cell grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveLayout {
    /// Recursion depth; the curve has `4^order` points
    pub order: u32,
    /// Side length of the square the curve fills
    pub extent: usize,
    /// Spacing multiplier applied to every truncated midpoint
    pub cell_size: i32,
    /// Offset added after scaling
    pub shift: Position,
}

/// Origin and basis vectors of the quadrant currently being subdivided
#[derive(Debug, Clone, Copy)]
struct Quadrant {
    origin: [f64; 2],
    i: [f64; 2],
    j: [f64; 2],
}

impl Quadrant {
    fn midpoint(self) -> [f64; 2] {
        [
            self.origin[0] + (self.i[0] + self.j[0]) / 2.0,
            self.origin[1] + (self.i[1] + self.j[1]) / 2.0,
        ]
    }

    /// The four sub-quadrants in traversal order
    fn subdivide(self) -> [Self; 4] {
        let [x, y] = self.origin;
        let half_i = [self.i[0] / 2.0, self.i[1] / 2.0];
        let half_j = [self.j[0] / 2.0, self.j[1] / 2.0];
        [
            Self {
                origin: [x, y],
                i: half_j,
                j: half_i,
            },
            Self {
                origin: [x + half_i[0], y + half_i[1]],
                i: half_i,
                j: half_j,
            },
            Self {
                origin: [x + half_i[0] + half_j[0], y + half_i[1] + half_j[1]],
                i: half_i,
                j: half_j,
            },
            Self {
                origin: [x + half_i[0] + self.j[0], y + half_i[1] + self.j[1]],
                i: [-half_j[0], -half_j[1]],
                j: [-half_i[0], -half_i[1]],
            },
        ]
    }
}

/// Number of points a curve of the given order produces
pub const fn point_count(order: u32) -> usize {
    4usize.pow(order)
}

/// Generate the guide curve points in traversal order
///
/// Always returns exactly `4^order` points. Points may fall outside the grid
/// once scaled and shifted; rasterization skips those.
///
/// # Errors
///
/// Returns [`crate::GenerationError::InvalidParameter`] if a scaled or
/// shifted coordinate does not fit in `i32`.
pub fn hilbert_points(layout: &CurveLayout) -> Result<Vec<Position>> {
    let mut points = Vec::with_capacity(point_count(layout.order));
    let extent = layout.extent as f64;
    let root = Quadrant {
        origin: [0.0, 0.0],
        i: [extent, 0.0],
        j: [0.0, extent],
    };
    subdivide_into(root, layout.order, layout, &mut points)?;
    Ok(points)
}

fn subdivide_into(
    quadrant: Quadrant,
    depth: u32,
    layout: &CurveLayout,
    out: &mut Vec<Position>,
) -> Result<()> {
    if depth == 0 {
        let [x, y] = quadrant.midpoint();
        out.push([
            place(x, layout.cell_size, layout.shift[0])?,
            place(y, layout.cell_size, layout.shift[1])?,
        ]);
        return Ok(());
    }
    for child in quadrant.subdivide() {
        subdivide_into(child, depth - 1, layout, out)?;
    }
    Ok(())
}

/// Truncate, scale and shift one midpoint coordinate
fn place(coordinate: f64, cell_size: i32, shift: i32) -> Result<i32> {
    // Truncate before scaling so points snap to the coarse lattice
    (coordinate as i32)
        .checked_mul(cell_size)
        .and_then(|scaled| scaled.checked_add(shift))
        .ok_or_else(|| {
            invalid_parameter(
                "hilbert_size",
                &cell_size,
                &"scaled curve coordinates overflow i32",
            )
        })
}
