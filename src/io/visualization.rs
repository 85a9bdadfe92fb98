//! Debug overlay of a generation's guide structures
//!
//! Layers are painted bottom to top: tiles, path mask, negative mask, guide
//! polyline, corners, segment cells and finally segment endpoints. The
//! generation is only read.

use std::path::Path;

use image::RgbaImage;

use crate::algorithm::executor::Generation;
use crate::io::error::Result;
use crate::io::image::{fill_cell, save_image, tiles_to_image};
use crate::spatial::grid::Position;

/// Path mask cells
pub const PATH_COLOR: [u8; 4] = [0, 255, 255, 255];
/// Cells forced closed by the negative mask
pub const NEGATIVE_COLOR: [u8; 4] = [0, 160, 0, 255];
/// Guide polyline between consecutive curve points
pub const CURVE_COLOR: [u8; 4] = [255, 220, 0, 255];
/// Corner and boundary endpoint cells
pub const CORNER_COLOR: [u8; 4] = [255, 0, 0, 255];
/// Cells belonging to a traced segment
pub const SEGMENT_COLOR: [u8; 4] = [255, 255, 0, 255];
/// First and last cell of each segment
pub const ENDPOINT_COLOR: [u8; 4] = [200, 0, 0, 255];

/// Paint the full debug overlay of a generation
pub fn render_overlay(generation: &Generation, scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    let guides = &generation.guides;
    let tiles = &generation.tiles;
    let mut img = tiles_to_image(tiles, scale);

    for pos in tiles.positions() {
        if guides.path.is_on_path(pos) {
            fill_cell(&mut img, pos, scale, PATH_COLOR);
        }
        if guides.negative.is_blocked(pos) {
            fill_cell(&mut img, pos, scale, NEGATIVE_COLOR);
        }
    }

    for pair in guides.points.windows(2) {
        if let [from, to] = pair {
            for pos in line_cells(*from, *to) {
                if tiles.contains(pos) {
                    fill_cell(&mut img, pos, scale, CURVE_COLOR);
                }
            }
        }
    }

    for corner in &guides.corners {
        fill_cell(&mut img, corner.position, scale, CORNER_COLOR);
    }

    for (_, segment) in guides.segments.iter() {
        for &pos in &segment.points {
            fill_cell(&mut img, pos, scale, SEGMENT_COLOR);
        }
        for pos in [segment.start(), segment.terminal()].into_iter().flatten() {
            fill_cell(&mut img, pos, scale, ENDPOINT_COLOR);
        }
    }

    img
}

/// Export the debug overlay as a PNG image
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_overlay(generation: &Generation, scale: u32, output_path: &Path) -> Result<()> {
    save_image(&render_overlay(generation, scale), output_path)
}

/// Cells on the straight line between two points, both ends included
///
/// Uses Bresenham stepping so diagonal quadrant jumps are drawn too.
pub fn line_cells(from: Position, to: Position) -> Vec<Position> {
    let [mut x, mut y] = from;
    let dx = (to[0] - x).abs();
    let dy = -(to[1] - y).abs();
    let sx = (to[0] - x).signum();
    let sy = (to[1] - y).signum();
    let mut error = dx + dy;
    let mut cells = Vec::with_capacity((dx - dy) as usize + 1);

    loop {
        cells.push([x, y]);
        if x == to[0] && y == to[1] {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += sx;
        }
        if doubled <= dx {
            error += dx;
            y += sy;
        }
    }

    cells
}
