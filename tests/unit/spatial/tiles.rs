//! Tests for tile values and the text rendering of tile grids

#[cfg(test)]
mod tests {
    use hilbertcave::spatial::tiles::{AsciiMap, Tile, TileGrid, floor_count};

    // Tests wall is the default tile and glyphs match
    // Verified by swapping the glyphs
    #[test]
    fn test_tile_defaults_and_glyphs() {
        assert_eq!(Tile::default(), Tile::Wall);
        assert_eq!(Tile::Wall.glyph(), '#');
        assert_eq!(Tile::Floor.glyph(), '.');
        assert!(Tile::Floor.is_floor());
        assert!(!Tile::Wall.is_floor());
    }

    // Tests the text rendering prints the top row first
    // Verified by iterating rows upward
    #[test]
    fn test_ascii_map_top_row_first() {
        let mut grid = TileGrid::new(3, 2);
        grid.set([0, 0], Tile::Floor);
        grid.set([2, 1], Tile::Floor);

        assert_eq!(AsciiMap(&grid).to_string(), "##.\n.##\n");
    }

    // Tests floor cells are counted
    // Verified by counting walls instead
    #[test]
    fn test_floor_count() {
        let mut grid = TileGrid::new(4, 4);
        assert_eq!(floor_count(&grid), 0);
        grid.set([1, 1], Tile::Floor);
        grid.set([2, 1], Tile::Floor);
        assert_eq!(floor_count(&grid), 2);
    }
}
