//! Tile values of the generated cave and their text rendering

use std::fmt;

use crate::spatial::grid::Grid;

/// Content of a single cave cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    /// Solid rock
    #[default]
    Wall,
    /// Walkable open space
    Floor,
}

impl Tile {
    /// Whether the tile is open space
    pub const fn is_floor(self) -> bool {
        matches!(self, Self::Floor)
    }

    /// Character used by the text rendering
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
        }
    }
}

/// Grid of cave tiles produced by the automaton
pub type TileGrid = Grid<Tile>;

/// Text rendering of a tile grid with the top row first
///
/// Rows are printed from `y = height - 1` down to `y = 0` so that the output
/// matches the bottom-left origin used everywhere else.
pub struct AsciiMap<'a>(pub &'a TileGrid);

impl fmt::Display for AsciiMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.0;
        for y in (0..grid.height() as i32).rev() {
            for x in 0..grid.width() as i32 {
                let tile = grid.get([x, y]).copied().unwrap_or_default();
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Count open cells in a tile grid
pub fn floor_count(grid: &TileGrid) -> usize {
    grid.count(|tile| tile.is_floor())
}
