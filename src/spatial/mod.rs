//! Spatial data structures shared by the generation stages
//!
//! This module contains spatial-related functionality including:
//! - Bounds-checked grid storage
//! - Cave tile values and text rendering
//! - Guide curve rasterization into the path mask

/// Bounds-checked 2D grid storage
pub mod grid;
/// Rasterization of the guide curve into the path mask
pub mod raster;
/// Cave tile values
pub mod tiles;

pub use grid::{Grid, Position};
pub use raster::PathMask;
pub use tiles::{Tile, TileGrid};
