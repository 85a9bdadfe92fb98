//! PNG export of the finished tile grid

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::error::{GenerationError, Result};
use crate::spatial::grid::{Grid, Position};
use crate::spatial::tiles::{Tile, TileGrid};

/// Colour of open floor
pub const FLOOR_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Colour of solid wall
pub const WALL_COLOR: [u8; 4] = [0, 0, 0, 255];

/// Paint every cell of a grid as a `scale × scale` block
///
/// Row 0 of the grid becomes the bottom of the image so the picture keeps
/// the grid's bottom-left origin.
pub fn paint_cells<T>(
    grid: &Grid<T>,
    scale: u32,
    color: impl Fn(&T) -> Option<[u8; 4]>,
) -> RgbaImage {
    let scale = scale.max(1);
    let width = grid.width() as u32 * scale;
    let height = grid.height() as u32 * scale;
    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for pos in grid.positions() {
        if let Some(rgba) = grid.get(pos).and_then(&color) {
            fill_cell(&mut img, pos, scale, rgba);
        }
    }

    img
}

/// Fill the pixel block of one cell, skipping cells outside the image
pub fn fill_cell(img: &mut RgbaImage, pos: Position, scale: u32, rgba: [u8; 4]) {
    let (Ok(x), Ok(y)) = (u32::try_from(pos[0]), u32::try_from(pos[1])) else {
        return;
    };
    let rows = img.height() / scale.max(1);
    if y >= rows {
        return;
    }
    let top = (rows - 1 - y) * scale;
    let left = x * scale;
    for py in top..top + scale {
        for px in left..left + scale {
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = Rgba(rgba);
            }
        }
    }
}

/// Render the tile grid, floor in white and wall in black
pub fn tiles_to_image(tiles: &TileGrid, scale: u32) -> RgbaImage {
    paint_cells(tiles, scale, |tile| {
        Some(match tile {
            Tile::Floor => FLOOR_COLOR,
            Tile::Wall => WALL_COLOR,
        })
    })
}

/// Save an image, creating the parent directory when needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_image(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    img.save(output_path)
        .map_err(|source| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}

/// Export the tile grid as a PNG image
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_tiles_as_png(tiles: &TileGrid, scale: u32, output_path: &Path) -> Result<()> {
    save_image(&tiles_to_image(tiles, scale), output_path)
}
