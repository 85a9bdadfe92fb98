use crate::{
    algorithm::automaton::{
        SmoothingConstraints, prune_isolated, random_fill, seal_border, smooth_pass,
    },
    algorithm::negative::NegativeMask,
    analysis::features::{Corner, FeatureClassifier, collect_corners},
    analysis::segments::{SegmentMap, SegmentTracer},
    io::configuration::{GeneratorConfig, SMOOTHING_PASSES},
    io::error::Result,
    math::hilbert::{CurveLayout, hilbert_points},
    math::probability::{SeedSource, random_shift, seeded_rng},
    spatial::grid::Position,
    spatial::raster::{PathMask, rasterize},
    spatial::tiles::{TileGrid, floor_count},
};
use rand::rngs::StdRng;

/// Guide structures derived from the Hilbert curve for one generation
///
/// Everything here is read-only output; the automaton only consumes the path
/// and negative masks.
#[derive(Debug, Clone)]
pub struct GuideLayers {
    /// Offset applied to the scaled curve
    pub shift: Position,
    /// Curve points in traversal order
    pub points: Vec<Position>,
    /// Rasterized curve
    pub path: PathMask,
    /// Corners and boundary endpoints of the path, in scan order
    pub corners: Vec<Corner>,
    /// Segments traced between boundary endpoints
    pub segments: SegmentMap,
    /// Cells forced closed during smoothing
    pub negative: NegativeMask,
}

/// Complete result of one generation pass
#[derive(Debug, Clone)]
pub struct Generation {
    /// Seed string actually used; reuse it to reproduce this map
    pub seed: String,
    /// Finished cave tiles
    pub tiles: TileGrid,
    /// Guide structures the tiles were shaped by
    pub guides: GuideLayers,
}

/// Hilbert-guided cellular automaton cave generator
///
/// Holds only the validated configuration; every call to
/// [`CaveGenerator::generate`] builds all grids from scratch.
#[derive(Debug, Clone)]
pub struct CaveGenerator {
    config: GeneratorConfig,
}

impl CaveGenerator {
    /// Create a generator from a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration parameter is out of range.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this generator runs with
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the full pipeline once
    ///
    /// Guide curve, rasterization, corner classification, segment tracing and
    /// the negative mask are built first; the automaton then fills, smooths,
    /// prunes and seals the tile grid.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A guide curve coordinate overflows
    /// - A segment walk exceeds its step budget
    pub fn generate(&self) -> Result<Generation> {
        let seed = SeedSource::from_config(&self.config.seed).resolve();
        let mut rng = seeded_rng(&seed);

        let guides = self.build_guides(&mut rng)?;
        let tiles = self.run_automaton(&guides, &mut rng);

        log::info!(
            "generated {}x{} cave with seed '{seed}': {} floor cells, {} segments",
            self.config.width,
            self.config.height,
            floor_count(&tiles),
            guides.segments.len()
        );

        Ok(Generation {
            seed,
            tiles,
            guides,
        })
    }

    /// Build the guide curve and every structure derived from it
    fn build_guides(&self, rng: &mut StdRng) -> Result<GuideLayers> {
        let GeneratorConfig {
            width,
            height,
            hilbert_order,
            hilbert_size,
            negative_path_girth,
            ..
        } = self.config;
        let extent = self.config.extent();

        let shift = [
            random_shift(rng, extent, hilbert_size),
            random_shift(rng, extent, hilbert_size),
        ];
        let points = hilbert_points(&CurveLayout {
            order: hilbert_order,
            extent,
            cell_size: hilbert_size,
            shift,
        })?;
        log::debug!("guide curve: {} points, shift {shift:?}", points.len());

        let path = rasterize(&points, extent);
        log::debug!("path mask: {} on-path cells", path.on_path_count());

        let classifier = FeatureClassifier::new(&path, width, height);
        let corners = collect_corners(&classifier);
        let segments = SegmentTracer::new(classifier).trace_all(&corners)?;
        log::debug!("{} corners, {} segments", corners.len(), segments.len());

        let negative = NegativeMask::build(&path, width, height, negative_path_girth);
        log::debug!("negative mask: {} blocked cells", negative.blocked_count());

        Ok(GuideLayers {
            shift,
            points,
            path,
            corners,
            segments,
            negative,
        })
    }

    /// Fill, smooth, prune and seal the tile grid
    fn run_automaton(&self, guides: &GuideLayers, rng: &mut StdRng) -> TileGrid {
        let mut tiles = random_fill(
            self.config.width,
            self.config.height,
            self.config.fill_percentage,
            rng,
        );

        let constraints = SmoothingConstraints {
            path: &guides.path,
            negative: &guides.negative,
            path_width: self.config.path_width,
        };
        for _ in 0..SMOOTHING_PASSES {
            smooth_pass(&mut tiles, &constraints);
        }

        let pruned = prune_isolated(&mut tiles);
        log::debug!("pruned {pruned} isolated floor cells");

        seal_border(&mut tiles);
        tiles
    }
}
