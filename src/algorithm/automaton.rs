//! Cellular automaton stages that turn random noise into the cave
//!
//! Smoothing updates cells in place, so later cells in a pass already see the
//! results of earlier ones. The guide masks are applied as overrides after the
//! majority rule for every cell.

use rand::Rng;

use crate::algorithm::negative::NegativeMask;
use crate::io::configuration::SMOOTHING_THRESHOLD;
use crate::math::probability::roll_percent;
use crate::spatial::grid::Position;
use crate::spatial::raster::PathMask;
use crate::spatial::tiles::{Tile, TileGrid};

/// Guide masks and widening radius applied during smoothing
#[derive(Debug, Clone, Copy)]
pub struct SmoothingConstraints<'a> {
    /// Cells forced to floor, optionally widened into rooms
    pub path: &'a PathMask,
    /// Cells forced to wall
    pub negative: &'a NegativeMask,
    /// Chebyshev radius opened around path cells in dense regions
    pub path_width: usize,
}

/// Fill the interior with random floor at the given density
///
/// Border cells start as wall. Cells are drawn column by column so the
/// sequence of RNG draws is fixed for a given size.
pub fn random_fill(
    width: usize,
    height: usize,
    fill_percentage: u8,
    rng: &mut impl Rng,
) -> TileGrid {
    let mut grid = TileGrid::new(width, height);
    for pos in grid.interior_positions() {
        let tile = if roll_percent(rng, fill_percentage) {
            Tile::Floor
        } else {
            Tile::Wall
        };
        grid.set(pos, tile);
    }
    grid
}

/// Number of floor cells among the eight neighbours of `pos`
pub fn floor_neighbours(grid: &TileGrid, pos: Position) -> usize {
    grid.count_moore(pos, |tile| tile.is_floor())
}

/// Run one in-place majority-rule pass over the interior
///
/// More than four floor neighbours opens a cell, fewer than four closes it,
/// exactly four leaves it alone. Blocked cells are then forced closed and
/// path cells forced open; a path cell that was in a dense region also
/// opens the `path_width` square around it.
pub fn smooth_pass(grid: &mut TileGrid, constraints: &SmoothingConstraints<'_>) {
    for pos in grid.interior_positions() {
        let neighbours = floor_neighbours(grid, pos);

        if neighbours > SMOOTHING_THRESHOLD {
            grid.set(pos, Tile::Floor);
        } else if neighbours < SMOOTHING_THRESHOLD {
            grid.set(pos, Tile::Wall);
        }

        if constraints.negative.is_blocked(pos) {
            grid.set(pos, Tile::Wall);
        }

        if constraints.path.is_on_path(pos) {
            grid.set(pos, Tile::Floor);
            if neighbours > SMOOTHING_THRESHOLD {
                grid.fill_square(pos, constraints.path_width, &Tile::Floor);
            }
        }
    }
}

/// Close interior floor cells that have no floor neighbour
///
/// This only removes single isolated cells; disconnected pockets of two or
/// more cells survive. Returns the number of cells closed.
pub fn prune_isolated(grid: &mut TileGrid) -> usize {
    let mut pruned = 0;
    for pos in grid.interior_positions() {
        if floor_neighbours(grid, pos) > 0 {
            continue;
        }
        if grid.get(pos).is_some_and(|tile| tile.is_floor()) {
            pruned += 1;
        }
        grid.set(pos, Tile::Wall);
    }
    pruned
}

/// Force the outer ring of the grid to wall
pub fn seal_border(grid: &mut TileGrid) {
    for pos in grid.border_positions() {
        grid.set(pos, Tile::Wall);
    }
}
