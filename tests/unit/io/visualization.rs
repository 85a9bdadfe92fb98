//! Tests for the debug overlay of guide structures

#[cfg(test)]
mod tests {
    use hilbertcave::algorithm::executor::{CaveGenerator, Generation, GuideLayers};
    use hilbertcave::algorithm::negative::NegativeMask;
    use hilbertcave::analysis::features::{CellFeature, Corner};
    use hilbertcave::analysis::segments::SegmentMap;
    use hilbertcave::io::configuration::GeneratorConfig;
    use hilbertcave::io::image::WALL_COLOR;
    use hilbertcave::io::visualization::{
        CORNER_COLOR, CURVE_COLOR, NEGATIVE_COLOR, PATH_COLOR, export_overlay, line_cells,
        render_overlay,
    };
    use hilbertcave::spatial::raster::PathMask;
    use hilbertcave::spatial::tiles::TileGrid;

    fn handmade_generation() -> Generation {
        let mut path = PathMask::new(6);
        path.mark([2, 2]);
        let mut negative = NegativeMask::open(6, 6);
        negative.block([4, 2]);

        Generation {
            seed: "handmade".to_string(),
            tiles: TileGrid::new(6, 6),
            guides: GuideLayers {
                shift: [0, 0],
                points: vec![[1, 4], [3, 4], [9, 4]],
                path,
                corners: vec![Corner {
                    position: [4, 1],
                    feature: CellFeature::CornerTopLeft,
                }],
                segments: SegmentMap::default(),
                negative,
            },
        }
    }

    // Tests each layer paints its own cells
    // Verified by painting the negative mask before the tiles
    #[test]
    fn test_render_overlay_layers() {
        let generation = handmade_generation();
        let img = render_overlay(&generation, 1);

        // Image rows are flipped, so cell (x, y) is pixel (x, 5 - y)
        assert_eq!(img.get_pixel(2, 3).0, PATH_COLOR);
        assert_eq!(img.get_pixel(4, 3).0, NEGATIVE_COLOR);
        assert_eq!(img.get_pixel(4, 4).0, CORNER_COLOR);
        assert_eq!(img.get_pixel(2, 1).0, CURVE_COLOR);
        assert_eq!(img.get_pixel(5, 1).0, CURVE_COLOR);
        assert_eq!(img.get_pixel(0, 0).0, WALL_COLOR);
    }

    // Tests rendering leaves the generation untouched
    // Verified by sealing the border of the tile grid while drawing
    #[test]
    fn test_render_is_read_only() {
        let generation = CaveGenerator::new(GeneratorConfig {
            width: 20,
            height: 16,
            seed: "overlay".to_string(),
            ..GeneratorConfig::default()
        })
        .and_then(|g| g.generate())
        .expect("Generation should succeed");
        let tiles_before = generation.tiles.clone();

        let img = render_overlay(&generation, 3);
        assert_eq!(img.dimensions(), (60, 48));
        assert_eq!(generation.tiles, tiles_before);
    }

    // Tests line rasterization for straight and diagonal segments
    // Verified by omitting the final endpoint
    #[test]
    fn test_line_cells() {
        assert_eq!(line_cells([0, 0], [3, 0]), vec![[0, 0], [1, 0], [2, 0], [3, 0]]);
        assert_eq!(line_cells([2, 2], [0, 0]), vec![[2, 2], [1, 1], [0, 0]]);
        assert_eq!(line_cells([1, 1], [1, 1]), vec![[1, 1]]);
        assert_eq!(line_cells([0, 3], [0, 1]), vec![[0, 3], [0, 2], [0, 1]]);
    }

    // Tests the overlay export writes a PNG
    // Verified by returning before saving
    #[test]
    fn test_export_overlay() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("overlay.png");

        export_overlay(&handmade_generation(), 2, &path).expect("Export should succeed");
        assert!(path.exists());
    }
}
