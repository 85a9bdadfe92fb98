//! Bounds-checked 2D grid storage shared by the tile grid and guide masks
//!
//! Cells are addressed as `[x, y]` with the origin at the bottom-left corner.
//! Every accessor takes signed coordinates so callers can probe neighbours of
//! border cells directly; out-of-range positions read as `None` and writes to
//! them are dropped.

use ndarray::Array2;

/// Signed cell coordinates `[x, y]`
pub type Position = [i32; 2];

/// The eight offsets of a Moore neighbourhood, excluding the centre
pub const MOORE_OFFSETS: [[i32; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Rectangular grid of cells backed by an `ndarray` matrix indexed `[x, y]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            cells: Array2::from_elem((width, height), value),
        }
    }

    /// Set every cell of a Chebyshev-radius square to `value`
    ///
    /// The square is clipped to the grid, so centres near the border only
    /// touch the in-bounds part. Returns the number of cells written.
    pub fn fill_square(&mut self, center: Position, radius: usize, value: &T) -> usize {
        let radius = radius as i32;
        let mut written = 0;
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                if self.set([center[0] + dx, center[1] + dy], value.clone()) {
                    written += 1;
                }
            }
        }
        written
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T> Grid<T> {
    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.dim().1
    }

    /// Convert signed coordinates to an array index if they are in bounds
    fn index(&self, pos: Position) -> Option<[usize; 2]> {
        let x = usize::try_from(pos[0]).ok()?;
        let y = usize::try_from(pos[1]).ok()?;
        (x < self.width() && y < self.height()).then_some([x, y])
    }

    /// Check whether a position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Whether a position lies on the outermost ring of the grid
    pub fn is_border(&self, pos: Position) -> bool {
        self.contains(pos)
            && (pos[0] == 0
                || pos[1] == 0
                || pos[0] == self.width() as i32 - 1
                || pos[1] == self.height() as i32 - 1)
    }

    /// Read a cell, or `None` outside the grid
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index(pos).and_then(|index| self.cells.get(index))
    }

    /// Write a cell, returning whether the position was in bounds
    pub fn set(&mut self, pos: Position, value: T) -> bool {
        match self.index(pos).and_then(|index| self.cells.get_mut(index)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Count Moore neighbours of `pos` satisfying `predicate`
    ///
    /// Neighbours outside the grid are not counted.
    pub fn count_moore(&self, pos: Position, predicate: impl Fn(&T) -> bool) -> usize {
        MOORE_OFFSETS
            .iter()
            .filter_map(|offset| self.get([pos[0] + offset[0], pos[1] + offset[1]]))
            .filter(|cell| predicate(cell))
            .count()
    }

    /// Count all cells satisfying `predicate`
    pub fn count(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.cells.iter().filter(|cell| predicate(cell)).count()
    }

    /// Every position of the grid, column by column
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let height = self.height() as i32;
        (0..self.width() as i32).flat_map(move |x| (0..height).map(move |y| [x, y]))
    }

    /// Positions excluding the border ring, column by column
    ///
    /// Empty when either dimension is smaller than 3.
    pub fn interior_positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let width = self.width() as i32;
        let height = self.height() as i32;
        (1..width - 1).flat_map(move |x| (1..height - 1).map(move |y| [x, y]))
    }

    /// Positions on the border ring
    pub fn border_positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let width = self.width() as i32;
        let height = self.height() as i32;
        self.positions()
            .filter(move |&[x, y]| x == 0 || y == 0 || x == width - 1 || y == height - 1)
    }
}
