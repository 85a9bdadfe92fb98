//! Tests for bounds-checked grid storage and neighbourhood queries

#[cfg(test)]
mod tests {
    use hilbertcave::spatial::grid::Grid;

    // Tests dimensions and default contents of a new grid
    // Verified by swapping width and height in the backing array
    #[test]
    fn test_new_grid_dimensions() {
        let grid: Grid<u8> = Grid::new(5, 3);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get([4, 2]), Some(&0));
        assert_eq!(grid.get([2, 4]), None);
    }

    // Tests reads and writes outside the grid are rejected
    // Verified by clamping coordinates instead of rejecting them
    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::filled(4, 4, 1u8);
        assert!(grid.get([-1, 0]).is_none());
        assert!(grid.get([0, 4]).is_none());
        assert!(!grid.set([4, 0], 9));
        assert!(!grid.set([0, -1], 9));
        assert!(grid.set([3, 3], 9));
        assert_eq!(grid.get([3, 3]), Some(&9));
        assert_eq!(grid.count(|&v| v == 9), 1);
    }

    // Tests border detection on all four sides
    // Verified by comparing against width instead of width - 1
    #[test]
    fn test_is_border() {
        let grid: Grid<u8> = Grid::new(5, 4);
        assert!(grid.is_border([0, 2]));
        assert!(grid.is_border([4, 2]));
        assert!(grid.is_border([2, 0]));
        assert!(grid.is_border([2, 3]));
        assert!(!grid.is_border([2, 2]));
        assert!(!grid.is_border([5, 2]));
    }

    // Tests Moore counts ignore neighbours outside the grid
    // Verified by counting missing neighbours as matches
    #[test]
    fn test_count_moore_at_corner() {
        let grid = Grid::filled(3, 3, true);
        assert_eq!(grid.count_moore([0, 0], |&v| v), 3);
        assert_eq!(grid.count_moore([1, 1], |&v| v), 8);
        assert_eq!(grid.count_moore([0, 1], |&v| v), 5);
    }

    // Tests square fills are clipped to the grid
    // Verified by counting every attempted write
    #[test]
    fn test_fill_square_clips_to_grid() {
        let mut grid = Grid::filled(5, 5, false);
        assert_eq!(grid.fill_square([0, 0], 1, &true), 4);
        assert_eq!(grid.count(|&v| v), 4);

        assert_eq!(grid.fill_square([2, 2], 2, &true), 25);
        assert_eq!(grid.count(|&v| v), 25);

        let mut single = Grid::filled(5, 5, false);
        assert_eq!(single.fill_square([2, 2], 0, &true), 1);
        assert_eq!(single.count(|&v| v), 1);
    }

    // Tests positions run column by column
    // Verified by swapping the loop nesting
    #[test]
    fn test_positions_are_column_major() {
        let grid: Grid<u8> = Grid::new(2, 3);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]
        );
    }

    // Tests interior and border iterators partition the grid
    // Verified by including the last column in the interior
    #[test]
    fn test_interior_and_border_partition() {
        let grid: Grid<u8> = Grid::new(6, 4);
        let interior: Vec<_> = grid.interior_positions().collect();
        let border: Vec<_> = grid.border_positions().collect();

        assert_eq!(interior.len(), 4 * 2);
        assert_eq!(border.len(), 2 * 6 + 2 * 4 - 4);
        assert!(interior.iter().all(|&pos| !grid.is_border(pos)));
        assert!(border.iter().all(|&pos| grid.is_border(pos)));
        assert_eq!(interior.first(), Some(&[1, 1]));
    }

    // Tests grids without an interior yield no interior positions
    // Verified by using an inclusive upper bound
    #[test]
    fn test_thin_grid_has_no_interior() {
        let grid: Grid<u8> = Grid::new(2, 5);
        assert_eq!(grid.interior_positions().count(), 0);
        assert_eq!(grid.border_positions().count(), 10);
    }
}
